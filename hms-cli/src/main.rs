//! CLI for the hospital management demo: pad key generation, sealing,
//! unsealing, and a scripted tour of the account and record workflow.

use clap::{Parser, Subcommand};
use hms_core::auth::{self, Signup, SignupProfile};
use hms_core::models::{AppointmentStatus, Role};
use hms_core::records::NewPatient;
use hms_core::scheduling::{self, NewAppointment};
use hms_core::store::SessionStore;
use hms_core::{billing, crypto, key_generator, records};
use log::error;
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh pad key
    Keygen {
        /// The number of characters to generate
        #[arg(short, long)]
        length: usize,
    },
    /// Seal a message, printing the base64 ciphertext and key
    Encrypt {
        /// The text to seal
        plaintext: String,

        /// The pad key; a fresh one of matching length is generated when omitted
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Unseal a base64 ciphertext with its base64 key
    Decrypt {
        /// The base64 ciphertext
        ciphertext: String,

        /// The base64 pad key
        key: String,
    },
    /// Run a scripted tour of the hospital management workflow
    Demo,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Keygen { length } => {
            println!("Key: {}", key_generator::generate_key(*length));
        }
        Commands::Encrypt { plaintext, key } => {
            let key = key.clone().unwrap_or_else(|| {
                key_generator::generate_key(plaintext.chars().count())
            });
            match crypto::encrypt(plaintext, &key) {
                Ok(sealed) => {
                    println!("Ciphertext: {}", sealed.ciphertext);
                    println!("Key: {}", sealed.key);
                }
                Err(e) => {
                    error!("Encryption failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Decrypt { ciphertext, key } => match crypto::decrypt(ciphertext, key) {
            Some(plaintext) => println!("Plaintext: {plaintext}"),
            None => {
                error!("Decryption failed. Check the ciphertext and key.");
                std::process::exit(1);
            }
        },
        Commands::Demo => {
            if let Err(e) = run_demo() {
                error!("Demo failed: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Walks through the whole system against a fresh session store: admin
/// login, doctor and patient sign-up, an appointment, and a bill.
fn run_demo() -> Result<(), Box<dyn Error>> {
    let mut store = SessionStore::new();
    auth::initialize(&mut store)?;

    let admin = auth::log_in(&store, Role::Admin, "admin", "admin123")?;
    println!("Logged in as {} ({:?})", admin.name, admin.role);

    let doctor_account = auth::sign_up(
        &mut store,
        &Signup {
            username: "drgrey".to_owned(),
            password: "s3cret!pw".to_owned(),
            name: "Meredith Grey".to_owned(),
            profile: SignupProfile::Doctor {
                specialization: "Cardiology".to_owned(),
                salary: Some(180_000.0),
            },
        },
    )?;
    let doctor = records::doctor_by_username(&store, &doctor_account.username)?
        .ok_or("doctor record missing after sign-up")?;
    println!("Registered Dr. {} (ID: {})", doctor.name, doctor.id);

    let patient = records::add_patient(
        &mut store,
        NewPatient {
            name: "John Doe".to_owned(),
            age: 42,
            phone: "555-0142".to_owned(),
            blood_group: "O+".to_owned(),
            symptoms: "persistent cough".to_owned(),
            assigned_doctor: Some(doctor.id),
        },
    )?;
    println!("Registered patient {} (ID: {})", patient.name, patient.id);

    let appointment = scheduling::book_appointment(
        &mut store,
        NewAppointment {
            patient_id: patient.id,
            doctor_id: doctor.id,
            date: "2025-09-01".to_owned(),
            time: "14:30".to_owned(),
            status: AppointmentStatus::Scheduled,
        },
    )?;
    println!(
        "Booked appointment #{} on {} at {}",
        appointment.id, appointment.date, appointment.time
    );

    let bill = billing::create_bill(
        &mut store,
        patient.id,
        billing::Charges {
            consultation: 150.0,
            tests: 75.5,
            room: 0.0,
            other: 12.0,
        },
        &appointment.date,
    )?;
    println!();
    print!("{}", billing::render_invoice(&store, bill.id)?);

    Ok(())
}
