// File:    records.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Patient and doctor record keeping on top of the session repository.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Patient and doctor record keeping. IDs are issued by the repository
//! counters; lookups are linear scans over the stored collections.

use log::info;

use crate::models::{Availability, Doctor, Patient};
use crate::store::{Repository, StoreError, keys};

/// Details for registering a patient directly (without a login account).
#[derive(Debug, Clone)]
pub struct NewPatient {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Contact phone number.
    pub phone: String,
    /// Blood group, e.g. "O+".
    pub blood_group: String,
    /// Free-text symptoms.
    pub symptoms: String,
    /// ID of the doctor to assign, if any.
    pub assigned_doctor: Option<u32>,
}

/// Details for registering a doctor directly (without a login account).
#[derive(Debug, Clone)]
pub struct NewDoctor {
    /// Full name.
    pub name: String,
    /// Medical specialization.
    pub specialization: String,
    /// Initial availability.
    pub availability: Availability,
    /// Annual salary, when disclosed.
    pub salary: Option<f64>,
}

/// Registers a patient and returns the stored record.
///
/// # Errors
///
/// Returns a [`StoreError`] if the store rejects a read or write.
pub fn add_patient<R: Repository>(store: &mut R, new: NewPatient) -> Result<Patient, StoreError> {
    let patient = Patient {
        id: store.next_id(keys::PATIENT_IDS)?,
        name: new.name,
        age: new.age,
        phone: new.phone,
        blood_group: new.blood_group,
        symptoms: new.symptoms,
        assigned_doctor: new.assigned_doctor,
        username: None,
    };
    let mut patients: Vec<Patient> = store.load_collection(keys::PATIENTS)?;
    patients.push(patient.clone());
    store.save_collection(keys::PATIENTS, &patients)?;
    info!("Registered patient {} ('{}').", patient.id, patient.name);
    Ok(patient)
}

/// Lists every registered patient in registration order.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn list_patients<R: Repository>(store: &R) -> Result<Vec<Patient>, StoreError> {
    store.load_collection(keys::PATIENTS)
}

/// Looks up a patient by ID.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn find_patient<R: Repository>(store: &R, id: u32) -> Result<Option<Patient>, StoreError> {
    Ok(list_patients(store)?.into_iter().find(|p| p.id == id))
}

/// Looks up the patient record attached to a login username.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn patient_by_username<R: Repository>(
    store: &R,
    username: &str,
) -> Result<Option<Patient>, StoreError> {
    Ok(list_patients(store)?
        .into_iter()
        .find(|p| p.username.as_deref() == Some(username)))
}

/// Lists the patients assigned to a doctor.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn patients_of_doctor<R: Repository>(
    store: &R,
    doctor_id: u32,
) -> Result<Vec<Patient>, StoreError> {
    Ok(list_patients(store)?
        .into_iter()
        .filter(|p| p.assigned_doctor == Some(doctor_id))
        .collect())
}

/// Registers a doctor and returns the stored record.
///
/// # Errors
///
/// Returns a [`StoreError`] if the store rejects a read or write.
pub fn add_doctor<R: Repository>(store: &mut R, new: NewDoctor) -> Result<Doctor, StoreError> {
    let doctor = Doctor {
        id: store.next_id(keys::DOCTOR_IDS)?,
        name: new.name,
        specialization: new.specialization,
        availability: new.availability,
        salary: new.salary,
        username: None,
    };
    let mut doctors: Vec<Doctor> = store.load_collection(keys::DOCTORS)?;
    doctors.push(doctor.clone());
    store.save_collection(keys::DOCTORS, &doctors)?;
    info!("Registered doctor {} ('{}').", doctor.id, doctor.name);
    Ok(doctor)
}

/// Lists every registered doctor in registration order.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn list_doctors<R: Repository>(store: &R) -> Result<Vec<Doctor>, StoreError> {
    store.load_collection(keys::DOCTORS)
}

/// Looks up a doctor by ID.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn find_doctor<R: Repository>(store: &R, id: u32) -> Result<Option<Doctor>, StoreError> {
    Ok(list_doctors(store)?.into_iter().find(|d| d.id == id))
}

/// Looks up the doctor record attached to a login username.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn doctor_by_username<R: Repository>(
    store: &R,
    username: &str,
) -> Result<Option<Doctor>, StoreError> {
    Ok(list_doctors(store)?
        .into_iter()
        .find(|d| d.username.as_deref() == Some(username)))
}
