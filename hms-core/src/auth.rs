// File:    auth.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Account creation, login, and initial seeding of the session store.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Account creation, login, and system seeding.
//!
//! Passwords never reach the store in the clear: each account carries the
//! sealed ciphertext and the pad key that unseals it, both produced with a
//! fresh key the length of the password. Login failures of every kind
//! collapse into [`AuthError::InvalidCredentials`] so callers surface a
//! single generic message.

use log::{debug, info};
use thiserror::Error;

use crate::crypto::{self, CryptoError};
use crate::key_generator::generate_key;
use crate::models::{Appointment, Availability, Bill, Doctor, Patient, Role, UserAccount};
use crate::store::{Repository, StoreError, keys};

/// The fixed administrator login name.
pub const ADMIN_USERNAME: &str = "admin";

/// The administrator password the store is seeded with.
const ADMIN_DEFAULT_PASSWORD: &str = "admin123";

/// Errors raised by account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username/password/role combination did not match any account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The requested username is already registered.
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),
    /// The password could not be sealed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Role-specific details supplied at sign-up.
#[derive(Debug, Clone)]
pub enum SignupProfile {
    /// Registering as a doctor.
    Doctor {
        /// Medical specialization.
        specialization: String,
        /// Annual salary, when disclosed.
        salary: Option<f64>,
    },
    /// Registering as a patient.
    Patient {
        /// Age in years.
        age: u32,
        /// Contact phone number.
        phone: String,
        /// Blood group, e.g. "O+".
        blood_group: String,
    },
}

/// A sign-up request.
#[derive(Debug, Clone)]
pub struct Signup {
    /// Requested login name.
    pub username: String,
    /// Password in the clear; sealed before storage.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Role-specific details.
    pub profile: SignupProfile,
}

/// Seeds a fresh store: the fixed admin account with its password sealed
/// under a fresh key, empty collections, and the ID counters. Calling this
/// on an already-seeded store is a no-op.
///
/// # Errors
///
/// Returns [`AuthError::Store`] if the store rejects a write, or
/// [`AuthError::Crypto`] if the admin password cannot be sealed.
pub fn initialize<R: Repository>(store: &mut R) -> Result<(), AuthError> {
    if store
        .load_record::<bool>(keys::SYSTEM_INITIALIZED)?
        .unwrap_or(false)
    {
        return Ok(());
    }

    let sealed = crypto::encrypt(
        ADMIN_DEFAULT_PASSWORD,
        &generate_key(ADMIN_DEFAULT_PASSWORD.len()),
    )?;
    let admin = UserAccount {
        username: ADMIN_USERNAME.to_owned(),
        password: sealed.ciphertext,
        key: sealed.key,
        role: Role::Admin,
        name: "System Administrator".to_owned(),
    };

    store.save_record(keys::ADMIN, &admin)?;
    store.save_collection::<UserAccount>(keys::USERS, &[])?;
    store.save_collection::<Patient>(keys::PATIENTS, &[])?;
    store.save_collection::<Doctor>(keys::DOCTORS, &[])?;
    store.save_collection::<Appointment>(keys::APPOINTMENTS, &[])?;
    store.save_collection::<Bill>(keys::BILLS, &[])?;
    store.save_record(keys::PATIENT_IDS, &1001_u32)?;
    store.save_record(keys::DOCTOR_IDS, &2001_u32)?;
    store.save_record(keys::APPOINTMENT_IDS, &3001_u32)?;
    store.save_record(keys::BILL_IDS, &4001_u32)?;
    store.save_record(keys::SYSTEM_INITIALIZED, &true)?;

    info!("Session store seeded with the administrator account.");
    Ok(())
}

/// Registers a new doctor or patient account, creating the matching record
/// row with the next counter ID.
///
/// # Errors
///
/// Returns [`AuthError::UsernameTaken`] when the login name is already
/// registered, or [`AuthError::Store`]/[`AuthError::Crypto`] on storage or
/// sealing failures.
pub fn sign_up<R: Repository>(store: &mut R, request: &Signup) -> Result<UserAccount, AuthError> {
    let mut users: Vec<UserAccount> = store.load_collection(keys::USERS)?;
    if users.iter().any(|u| u.username == request.username) {
        return Err(AuthError::UsernameTaken(request.username.clone()));
    }

    let sealed = crypto::encrypt(&request.password, &generate_key(request.password.len()))?;

    let role = match &request.profile {
        SignupProfile::Doctor {
            specialization,
            salary,
        } => {
            let id = store.next_id(keys::DOCTOR_IDS)?;
            let mut doctors: Vec<Doctor> = store.load_collection(keys::DOCTORS)?;
            doctors.push(Doctor {
                id,
                name: request.name.clone(),
                specialization: specialization.clone(),
                availability: Availability::Available,
                salary: *salary,
                username: Some(request.username.clone()),
            });
            store.save_collection(keys::DOCTORS, &doctors)?;
            Role::Doctor
        }
        SignupProfile::Patient {
            age,
            phone,
            blood_group,
        } => {
            let id = store.next_id(keys::PATIENT_IDS)?;
            let mut patients: Vec<Patient> = store.load_collection(keys::PATIENTS)?;
            patients.push(Patient {
                id,
                name: request.name.clone(),
                age: *age,
                phone: phone.clone(),
                blood_group: blood_group.clone(),
                symptoms: String::new(),
                assigned_doctor: None,
                username: Some(request.username.clone()),
            });
            store.save_collection(keys::PATIENTS, &patients)?;
            Role::Patient
        }
    };

    let account = UserAccount {
        username: request.username.clone(),
        password: sealed.ciphertext,
        key: sealed.key,
        role,
        name: request.name.clone(),
    };
    users.push(account.clone());
    store.save_collection(keys::USERS, &users)?;

    info!("Registered {:?} account '{}'.", role, account.username);
    Ok(account)
}

/// Authenticates `username` under `role`, comparing the supplied password
/// against the unsealed stored one (exact, case-sensitive).
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] when no account matches, the
/// stored ciphertext cannot be unsealed, or the password differs. Storage
/// failures surface as [`AuthError::Store`].
pub fn log_in<R: Repository>(
    store: &R,
    role: Role,
    username: &str,
    password: &str,
) -> Result<UserAccount, AuthError> {
    let account = if role == Role::Admin {
        store
            .load_record::<UserAccount>(keys::ADMIN)?
            .filter(|admin| admin.username == username)
    } else {
        store
            .load_collection::<UserAccount>(keys::USERS)?
            .into_iter()
            .find(|u| u.username == username && u.role == role)
    };

    let Some(account) = account else {
        debug!("Login rejected: no {role:?} account named '{username}'.");
        return Err(AuthError::InvalidCredentials);
    };

    match crypto::decrypt(&account.password, &account.key) {
        Some(stored) if stored == password => Ok(account),
        _ => {
            debug!("Login rejected for '{username}': password mismatch.");
            Err(AuthError::InvalidCredentials)
        }
    }
}
