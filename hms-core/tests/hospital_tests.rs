#![allow(missing_docs)]
use hms_core::models::{AppointmentStatus, Availability};
use hms_core::records::{self, NewDoctor, NewPatient};
use hms_core::scheduling::{self, NewAppointment, ScheduleError};
use hms_core::store::SessionStore;
use hms_core::{auth, billing};

fn seeded_store() -> SessionStore {
    let mut store = SessionStore::new();
    auth::initialize(&mut store).unwrap();
    store
}

fn sample_patient(assigned_doctor: Option<u32>) -> NewPatient {
    NewPatient {
        name: "John Doe".to_owned(),
        age: 42,
        phone: "555-0142".to_owned(),
        blood_group: "O+".to_owned(),
        symptoms: "persistent cough".to_owned(),
        assigned_doctor,
    }
}

fn sample_doctor() -> NewDoctor {
    NewDoctor {
        name: "Meredith Grey".to_owned(),
        specialization: "Cardiology".to_owned(),
        availability: Availability::Available,
        salary: Some(180_000.0),
    }
}

#[test]
fn test_patients_and_doctors_get_counter_ids() {
    let mut store = seeded_store();

    let first = records::add_patient(&mut store, sample_patient(None)).unwrap();
    let second = records::add_patient(&mut store, sample_patient(None)).unwrap();
    let doctor = records::add_doctor(&mut store, sample_doctor()).unwrap();

    assert_eq!((first.id, second.id), (1001, 1002));
    assert_eq!(doctor.id, 2001);
    assert_eq!(records::list_patients(&store).unwrap().len(), 2);
    assert_eq!(records::find_patient(&store, 1002).unwrap().unwrap().name, "John Doe");
    assert!(records::find_patient(&store, 9999).unwrap().is_none());
}

#[test]
fn test_patients_of_doctor_filters_on_assignment() {
    let mut store = seeded_store();
    let doctor = records::add_doctor(&mut store, sample_doctor()).unwrap();
    records::add_patient(&mut store, sample_patient(Some(doctor.id))).unwrap();
    records::add_patient(&mut store, sample_patient(None)).unwrap();

    let assigned = records::patients_of_doctor(&store, doctor.id).unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].assigned_doctor, Some(doctor.id));
}

#[test]
fn test_booking_requires_existing_parties() {
    let mut store = seeded_store();
    let doctor = records::add_doctor(&mut store, sample_doctor()).unwrap();
    let patient = records::add_patient(&mut store, sample_patient(Some(doctor.id))).unwrap();

    let booked = scheduling::book_appointment(
        &mut store,
        NewAppointment {
            patient_id: patient.id,
            doctor_id: doctor.id,
            date: "2025-09-01".to_owned(),
            time: "14:30".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
    )
    .unwrap();
    assert_eq!(booked.id, 3001);

    let err = scheduling::book_appointment(
        &mut store,
        NewAppointment {
            patient_id: 9999,
            doctor_id: doctor.id,
            date: "2025-09-01".to_owned(),
            time: "15:00".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownPatient(9999)));

    let err = scheduling::book_appointment(
        &mut store,
        NewAppointment {
            patient_id: patient.id,
            doctor_id: 42,
            date: "2025-09-01".to_owned(),
            time: "15:00".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
    )
    .unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownDoctor(42)));
}

#[test]
fn test_appointment_views_per_party() {
    let mut store = seeded_store();
    let doctor = records::add_doctor(&mut store, sample_doctor()).unwrap();
    let patient = records::add_patient(&mut store, sample_patient(Some(doctor.id))).unwrap();
    let other = records::add_patient(&mut store, sample_patient(None)).unwrap();

    for (pid, time) in [(patient.id, "09:00"), (other.id, "10:00")] {
        scheduling::book_appointment(
            &mut store,
            NewAppointment {
                patient_id: pid,
                doctor_id: doctor.id,
                date: "2025-09-01".to_owned(),
                time: time.to_owned(),
                status: AppointmentStatus::Scheduled,
            },
        )
        .unwrap();
    }

    assert_eq!(scheduling::appointments_for_doctor(&store, doctor.id).unwrap().len(), 2);
    assert_eq!(scheduling::appointments_for_patient(&store, patient.id).unwrap().len(), 1);
    assert_eq!(scheduling::appointments_for_patient(&store, 9999).unwrap().len(), 0);
}

#[test]
fn test_search_matches_names_ids_and_dates() {
    let mut store = seeded_store();
    let doctor = records::add_doctor(&mut store, sample_doctor()).unwrap();
    let patient = records::add_patient(&mut store, sample_patient(Some(doctor.id))).unwrap();
    scheduling::book_appointment(
        &mut store,
        NewAppointment {
            patient_id: patient.id,
            doctor_id: doctor.id,
            date: "2025-09-01".to_owned(),
            time: "14:30".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
    )
    .unwrap();

    assert_eq!(scheduling::search_appointments(&store, "JOHN").unwrap().len(), 1);
    assert_eq!(scheduling::search_appointments(&store, "grey").unwrap().len(), 1);
    assert_eq!(scheduling::search_appointments(&store, "2025-09").unwrap().len(), 1);
    assert_eq!(scheduling::search_appointments(&store, "3001").unwrap().len(), 1);
    assert_eq!(scheduling::search_appointments(&store, "").unwrap().len(), 1);
    assert_eq!(scheduling::search_appointments(&store, "house").unwrap().len(), 0);
}

#[test]
fn test_bill_total_is_the_sum_of_charges() {
    let mut store = seeded_store();
    let patient = records::add_patient(&mut store, sample_patient(None)).unwrap();

    let bill = billing::create_bill(
        &mut store,
        patient.id,
        billing::Charges {
            consultation: 100.0,
            tests: 20.5,
            room: 0.25,
            other: 4.25,
        },
        "2025-09-01",
    )
    .unwrap();

    assert_eq!(bill.id, 4001);
    assert!((bill.total - 125.0).abs() < f64::EPSILON);
    assert_eq!(billing::bills_for_patient(&store, patient.id).unwrap().len(), 1);
    assert_eq!(billing::bills_for_patient(&store, 9999).unwrap().len(), 0);
}

#[test]
fn test_billing_requires_an_existing_patient() {
    let mut store = seeded_store();
    let err = billing::create_bill(&mut store, 9999, billing::Charges::default(), "2025-09-01")
        .unwrap_err();
    assert!(matches!(err, billing::BillingError::UnknownPatient(9999)));
}

#[test]
fn test_invoice_rendering() {
    let mut store = seeded_store();
    let patient = records::add_patient(&mut store, sample_patient(None)).unwrap();
    let bill = billing::create_bill(
        &mut store,
        patient.id,
        billing::Charges {
            consultation: 100.0,
            tests: 20.5,
            room: 0.25,
            other: 4.25,
        },
        "2025-09-01",
    )
    .unwrap();

    let invoice = billing::render_invoice(&store, bill.id).unwrap();
    assert!(invoice.contains("City General Hospital"));
    assert!(invoice.contains("Patient: John Doe"));
    assert!(invoice.contains("Consultation Fee: $100.00"));
    assert!(invoice.contains("Total: $125.00"));

    let err = billing::render_invoice(&store, 1).unwrap_err();
    assert!(matches!(err, billing::BillingError::UnknownBill(1)));
}
