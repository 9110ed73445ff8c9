//! CLI argument definitions for the hospital management console.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use hms_model::{CabinType, Gender, RecordType};

#[derive(Parser)]
#[command(
    name = "hms-console",
    version,
    about = "Hospital Management Console - CRUD over hospitals, doctors, patients, cabins and finances",
    long_about = "Manage hospital records from the terminal.\n\n\
                  All records live in one JSON state file, seeded with fixture data on\n\
                  first run. Every mutating command rewrites the full state file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// State file path (default: hospital-management-state.json in the
    /// current directory).
    #[arg(long = "state-file", value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage hospitals.
    Hospital {
        #[command(subcommand)]
        command: HospitalCommand,
    },
    /// Manage doctors.
    Doctor {
        #[command(subcommand)]
        command: DoctorCommand,
    },
    /// Manage patients.
    Patient {
        #[command(subcommand)]
        command: PatientCommand,
    },
    /// Manage cabins.
    Cabin {
        #[command(subcommand)]
        command: CabinCommand,
    },
    /// Manage financial records.
    Finance {
        #[command(subcommand)]
        command: FinanceCommand,
    },
    /// Show record counts, cabin occupancy and finance totals.
    Dashboard,
    /// Generate a family-readable summary for a patient.
    Summarize {
        /// Patient id.
        #[arg(value_name = "PATIENT_ID")]
        patient_id: String,
    },
}

#[derive(Subcommand)]
pub enum HospitalCommand {
    /// Add a hospital.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
    },
    /// List all hospitals.
    List,
    /// Update a hospital (unset fields keep their current value).
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a hospital. Dependent records are not cascaded.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum DoctorCommand {
    /// Add a doctor.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        specialization: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        schedule: String,
        /// Hospital the doctor belongs to.
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: String,
    },
    /// List all doctors.
    List,
    /// Update a doctor (unset fields keep their current value).
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        specialization: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        schedule: Option<String>,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: Option<String>,
    },
    /// Delete a doctor.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum PatientCommand {
    /// Admit a patient.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long, value_name = "Male|Female|Other")]
        gender: Gender,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        /// Admission date (YYYY-MM-DD).
        #[arg(long = "admitted", value_name = "DATE")]
        admission_date: NaiveDate,
        /// Treatment notes from the attending doctor.
        #[arg(long)]
        treatment: String,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: String,
        #[arg(long = "doctor", value_name = "DOCTOR_ID")]
        doctor_id: String,
        /// Optional cabin assignment.
        #[arg(long = "cabin", value_name = "CABIN_ID")]
        cabin_id: Option<String>,
    },
    /// List all patients.
    List,
    /// Update a patient (unset fields keep their current value).
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long, value_name = "Male|Female|Other")]
        gender: Option<Gender>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long = "admitted", value_name = "DATE")]
        admission_date: Option<NaiveDate>,
        #[arg(long)]
        treatment: Option<String>,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: Option<String>,
        #[arg(long = "doctor", value_name = "DOCTOR_ID")]
        doctor_id: Option<String>,
        #[arg(long = "cabin", value_name = "CABIN_ID")]
        cabin_id: Option<String>,
        /// Clear the cabin assignment.
        #[arg(long = "no-cabin", conflicts_with = "cabin_id")]
        no_cabin: bool,
    },
    /// Discharge (delete) a patient.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum CabinCommand {
    /// Add a cabin.
    Add {
        #[arg(long = "number")]
        cabin_number: String,
        #[arg(long = "type", value_name = "General|Private|ICU")]
        kind: CabinType,
        /// Mark the cabin occupied (vacant by default).
        #[arg(long)]
        occupied: bool,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: String,
    },
    /// List all cabins.
    List,
    /// Update a cabin (unset fields keep their current value).
    Update {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(long = "number")]
        cabin_number: Option<String>,
        #[arg(long = "type", value_name = "General|Private|ICU")]
        kind: Option<CabinType>,
        #[arg(long, conflicts_with = "vacant")]
        occupied: bool,
        #[arg(long)]
        vacant: bool,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: Option<String>,
    },
    /// Delete a cabin.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum FinanceCommand {
    /// Record an income or expense entry. Entries cannot be edited later.
    Add {
        #[arg(long = "type", value_name = "Income|Expense")]
        kind: RecordType,
        #[arg(long)]
        description: String,
        /// Non-negative amount.
        #[arg(long)]
        amount: f64,
        /// Entry date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        #[arg(long = "hospital", value_name = "HOSPITAL_ID")]
        hospital_id: String,
    },
    /// List all financial records.
    List,
    /// Delete a financial record.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
}
