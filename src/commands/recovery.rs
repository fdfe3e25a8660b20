use std::path::Path;

use widgets::recovery::{self, RECOVERY_PLAN, RECOVERY_SIGNUPS, SignupForm};

use super::short_id;
use crate::cli::RecoveryCommand;
use crate::error::CliError;
use crate::services::print;
use crate::state::{AppState, display_now, now_ms};

pub fn run(state: &AppState, cmd: RecoveryCommand) -> Result<(), CliError> {
    match cmd {
        RecoveryCommand::Signup { name, contact, program, time, notes } => {
            let form = SignupForm { name, contact, program, preferred_time: time, notes };
            let now = now_ms();
            let signup = state
                .storage
                .update(&RECOVERY_SIGNUPS, |list| recovery::sign_up(list, form, now).cloned())?;
            println!("Thanks, {}! A leader will reach out at {}.", signup.name, signup.contact);
        }
        RecoveryCommand::Signups => {
            for s in state.storage.load(&RECOVERY_SIGNUPS)? {
                let program = if s.program.is_empty() { "any program" } else { s.program.as_str() };
                println!("{}  {} <{}> {} {}", short_id(&s.id), s.name, s.contact, program, s.preferred_time);
                if !s.notes.is_empty() {
                    println!("          {}", s.notes);
                }
            }
        }
        RecoveryCommand::Unsign { id } => {
            let removed = state.storage.update(&RECOVERY_SIGNUPS, |list| recovery::remove_signup(list, &id))?;
            println!("Removed signup for {}", removed.name);
        }
        RecoveryCommand::Plan => {
            let plan = state.storage.load(&RECOVERY_PLAN)?;
            for section in &plan.sections {
                println!("== {} ==", section.title);
                for field in &section.fields {
                    println!("  {}: {}", field.printable_label(), field.printable_value());
                }
            }
        }
        RecoveryCommand::Set { section, label, value } => {
            let field = state
                .storage
                .update(&RECOVERY_PLAN, |plan| recovery::set_field(plan, &section, &label, &value).cloned())?;
            println!("{}: {}", field.printable_label(), field.printable_value());
        }
        RecoveryCommand::Print { out } => {
            let plan = state.storage.load(&RECOVERY_PLAN)?;
            let generated_at = display_now();
            if out == Path::new("-") {
                print!("{}", print::render_plan(&plan, &generated_at));
            } else {
                print::write_plan(&plan, &generated_at, &out)?;
                println!("Wrote {}", out.display());
            }
        }
    }
    Ok(())
}
