// File:    models.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Defines the record types held in the session store.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The record types held in the session store. Field names serialize in
//! camelCase, which is the on-store wire format.

use serde::{Deserialize, Serialize};

/// The role attached to an account, deciding which records it may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access to every collection.
    Admin,
    /// Sees their own appointments and assigned patients.
    Doctor,
    /// Sees their own record, appointments, and bills.
    Patient,
}

/// A login account. The password is stored sealed: `password` holds the
/// base64 ciphertext and `key` the base64 pad that unseals it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Unique login name.
    pub username: String,
    /// Base64 ciphertext of the password.
    pub password: String,
    /// Base64 pad key for the password.
    pub key: String,
    /// The account's role.
    pub role: Role,
    /// Display name.
    pub name: String,
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Counter-issued ID, starting at 1001.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Contact phone number.
    pub phone: String,
    /// Blood group, e.g. "O+".
    pub blood_group: String,
    /// Free-text symptoms, empty until recorded.
    pub symptoms: String,
    /// ID of the assigned doctor, if any.
    pub assigned_doctor: Option<u32>,
    /// Login username when the patient self-registered.
    pub username: Option<String>,
}

/// Whether a doctor is currently taking appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// Taking appointments.
    Available,
    /// Temporarily away.
    OnLeave,
    /// Not taking appointments.
    Unavailable,
}

/// A registered doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    /// Counter-issued ID, starting at 2001.
    pub id: u32,
    /// Full name, without the "Dr." honorific.
    pub name: String,
    /// Medical specialization.
    pub specialization: String,
    /// Current availability.
    pub availability: Availability,
    /// Annual salary, when disclosed.
    pub salary: Option<f64>,
    /// Login username when the doctor self-registered.
    pub username: Option<String>,
}

/// The lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Booked and upcoming.
    Scheduled,
    /// The visit took place.
    Completed,
    /// Called off before the visit.
    Cancelled,
}

/// A booked appointment between a patient and a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Counter-issued ID, starting at 3001.
    pub id: u32,
    /// The patient's ID.
    pub patient_id: u32,
    /// The doctor's ID.
    pub doctor_id: u32,
    /// Visit date, e.g. "2025-08-02".
    pub date: String,
    /// Visit time, e.g. "14:30".
    pub time: String,
    /// Current status.
    pub status: AppointmentStatus,
}

/// An itemized bill issued to a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Counter-issued ID, starting at 4001.
    pub id: u32,
    /// The billed patient's ID.
    pub patient_id: u32,
    /// Consultation fee.
    pub consultation: f64,
    /// Laboratory and test charges.
    pub tests: f64,
    /// Room charge.
    pub room: f64,
    /// Any other charges.
    pub other: f64,
    /// Sum of all charge lines, fixed at creation.
    pub total: f64,
    /// Issue date.
    pub date: String,
}
