// File:    billing.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Bill creation, lookup, and plain-text invoice rendering.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Bill creation, lookup, and invoice rendering.

use std::fmt::Write as _;

use log::info;
use thiserror::Error;

use crate::models::Bill;
use crate::records;
use crate::store::{Repository, StoreError, keys};

/// Errors raised by billing operations.
#[derive(Debug, Error)]
pub enum BillingError {
    /// The referenced patient does not exist.
    #[error("no patient with id {0}")]
    UnknownPatient(u32),
    /// The referenced bill does not exist.
    #[error("no bill with id {0}")]
    UnknownBill(u32),
    /// The session store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The charge lines of a bill. The total is their sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Charges {
    /// Consultation fee.
    pub consultation: f64,
    /// Laboratory and test charges.
    pub tests: f64,
    /// Room charge.
    pub room: f64,
    /// Any other charges.
    pub other: f64,
}

impl Charges {
    /// Sum of all charge lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.consultation + self.tests + self.room + self.other
    }
}

/// Creates a bill for a patient, fixing the total at creation time.
///
/// # Errors
///
/// Returns [`BillingError::UnknownPatient`] if the patient does not exist,
/// or [`BillingError::Store`] on storage failures.
pub fn create_bill<R: Repository>(
    store: &mut R,
    patient_id: u32,
    charges: Charges,
    date: &str,
) -> Result<Bill, BillingError> {
    if records::find_patient(store, patient_id)?.is_none() {
        return Err(BillingError::UnknownPatient(patient_id));
    }

    let bill = Bill {
        id: store.next_id(keys::BILL_IDS)?,
        patient_id,
        consultation: charges.consultation,
        tests: charges.tests,
        room: charges.room,
        other: charges.other,
        total: charges.total(),
        date: date.to_owned(),
    };
    let mut bills: Vec<Bill> = store.load_collection(keys::BILLS)?;
    bills.push(bill.clone());
    store.save_collection(keys::BILLS, &bills)?;
    info!(
        "Created bill {} for patient {} totalling {:.2}.",
        bill.id, bill.patient_id, bill.total
    );
    Ok(bill)
}

/// Lists every bill in creation order.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn list_bills<R: Repository>(store: &R) -> Result<Vec<Bill>, StoreError> {
    store.load_collection(keys::BILLS)
}

/// Lists the bills issued to a patient.
///
/// # Errors
///
/// Returns a [`StoreError`] if the collection cannot be read.
pub fn bills_for_patient<R: Repository>(
    store: &R,
    patient_id: u32,
) -> Result<Vec<Bill>, StoreError> {
    Ok(list_bills(store)?
        .into_iter()
        .filter(|b| b.patient_id == patient_id)
        .collect())
}

/// Renders a bill as a plain-text invoice. A missing patient record shows
/// as "Unknown" rather than failing the render.
///
/// # Errors
///
/// Returns [`BillingError::UnknownBill`] if the bill does not exist, or
/// [`BillingError::Store`] on storage failures.
pub fn render_invoice<R: Repository>(store: &R, bill_id: u32) -> Result<String, BillingError> {
    let bill = list_bills(store)?
        .into_iter()
        .find(|b| b.id == bill_id)
        .ok_or(BillingError::UnknownBill(bill_id))?;
    let patient_name = records::find_patient(store, bill.patient_id)?
        .map_or_else(|| "Unknown".to_owned(), |p| p.name);

    let mut invoice = String::new();
    let _ = writeln!(invoice, "City General Hospital");
    let _ = writeln!(invoice, "Bill Invoice");
    let _ = writeln!(invoice, "Bill ID: {}", bill.id);
    let _ = writeln!(invoice, "Patient: {patient_name}");
    let _ = writeln!(invoice, "Patient ID: {}", bill.patient_id);
    let _ = writeln!(invoice, "Date: {}", bill.date);
    let _ = writeln!(invoice, "Consultation Fee: ${:.2}", bill.consultation);
    let _ = writeln!(invoice, "Tests: ${:.2}", bill.tests);
    let _ = writeln!(invoice, "Room Charge: ${:.2}", bill.room);
    let _ = writeln!(invoice, "Other Charges: ${:.2}", bill.other);
    let _ = writeln!(invoice, "Total: ${:.2}", bill.total);
    Ok(invoice)
}
