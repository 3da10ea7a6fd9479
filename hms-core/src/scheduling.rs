// File:    scheduling.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Appointment booking and search over the session repository.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Appointment booking and search.

use log::info;
use thiserror::Error;

use crate::models::{Appointment, AppointmentStatus, Doctor, Patient};
use crate::records;
use crate::store::{Repository, StoreError, keys};

/// Errors raised while booking appointments.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The referenced patient does not exist.
    #[error("no patient with id {0}")]
    UnknownPatient(u32),
    /// The referenced doctor does not exist.
    #[error("no doctor with id {0}")]
    UnknownDoctor(u32),
    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A booking request.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    /// The patient's ID.
    pub patient_id: u32,
    /// The doctor's ID.
    pub doctor_id: u32,
    /// Visit date, e.g. "2025-08-02".
    pub date: String,
    /// Visit time, e.g. "14:30".
    pub time: String,
    /// Initial status.
    pub status: AppointmentStatus,
}

/// Books an appointment after checking that both parties exist.
///
/// # Errors
///
/// Returns [`ScheduleError::UnknownPatient`] or
/// [`ScheduleError::UnknownDoctor`] for a dangling reference, or
/// [`ScheduleError::Store`] on storage failures.
pub fn book_appointment<R: Repository>(
    store: &mut R,
    new: NewAppointment,
) -> Result<Appointment, ScheduleError> {
    if records::find_patient(store, new.patient_id)?.is_none() {
        return Err(ScheduleError::UnknownPatient(new.patient_id));
    }
    if records::find_doctor(store, new.doctor_id)?.is_none() {
        return Err(ScheduleError::UnknownDoctor(new.doctor_id));
    }

    let appointment = Appointment {
        id: store.next_id(keys::APPOINTMENT_IDS)?,
        patient_id: new.patient_id,
        doctor_id: new.doctor_id,
        date: new.date,
        time: new.time,
        status: new.status,
    };
    let mut appointments: Vec<Appointment> = store.load_collection(keys::APPOINTMENTS)?;
    appointments.push(appointment.clone());
    store.save_collection(keys::APPOINTMENTS, &appointments)?;
    info!(
        "Booked appointment {} for patient {} with doctor {}.",
        appointment.id, appointment.patient_id, appointment.doctor_id
    );
    Ok(appointment)
}

/// Lists every appointment in booking order.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn list_appointments<R: Repository>(store: &R) -> Result<Vec<Appointment>, StoreError> {
    store.load_collection(keys::APPOINTMENTS)
}

/// Lists the appointments booked with a doctor.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn appointments_for_doctor<R: Repository>(
    store: &R,
    doctor_id: u32,
) -> Result<Vec<Appointment>, StoreError> {
    Ok(list_appointments(store)?
        .into_iter()
        .filter(|a| a.doctor_id == doctor_id)
        .collect())
}

/// Lists the appointments booked for a patient.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn appointments_for_patient<R: Repository>(
    store: &R,
    patient_id: u32,
) -> Result<Vec<Appointment>, StoreError> {
    Ok(list_appointments(store)?
        .into_iter()
        .filter(|a| a.patient_id == patient_id)
        .collect())
}

/// Case-insensitive substring search over appointment ID, patient name,
/// doctor name, and date. The empty query matches every appointment.
///
/// # Errors
///
/// Returns a [`StoreError`] if any collection cannot be read.
pub fn search_appointments<R: Repository>(
    store: &R,
    query: &str,
) -> Result<Vec<Appointment>, StoreError> {
    let query = query.to_lowercase();
    let patients: Vec<Patient> = store.load_collection(keys::PATIENTS)?;
    let doctors: Vec<Doctor> = store.load_collection(keys::DOCTORS)?;

    Ok(list_appointments(store)?
        .into_iter()
        .filter(|apt| {
            let patient = patients.iter().find(|p| p.id == apt.patient_id);
            let doctor = doctors.iter().find(|d| d.id == apt.doctor_id);
            apt.id.to_string().contains(&query)
                || patient.is_some_and(|p| p.name.to_lowercase().contains(&query))
                || doctor.is_some_and(|d| d.name.to_lowercase().contains(&query))
                || apt.date.contains(&query)
        })
        .collect())
}
