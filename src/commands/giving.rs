use widgets::giving::{self, GOAL, PAY_HANDLES, PAY_METHOD, PayMethod, RAISED};

use crate::cli::GiveCommand;
use crate::error::CliError;
use crate::state::AppState;

pub fn run(state: &AppState, cmd: GiveCommand) -> Result<(), CliError> {
    match cmd {
        GiveCommand::Status => {}
        GiveCommand::Add => {
            state.storage.update(&RAISED, |raised| {
                *raised = giving::adjust(*raised, true);
                Ok::<_, CliError>(())
            })?;
        }
        GiveCommand::Sub => {
            state.storage.update(&RAISED, |raised| {
                *raised = giving::adjust(*raised, false);
                Ok::<_, CliError>(())
            })?;
        }
        GiveCommand::Reset => state.storage.save(&RAISED, &0)?,
        GiveCommand::Goal { amount } => state.storage.save(&GOAL, &giving::validate_goal(amount)?)?,
        GiveCommand::Method { method } => {
            if let Some(raw) = method {
                let method: PayMethod = raw.parse()?;
                state.storage.save(&PAY_METHOD, &method)?;
            }
            let method = state.storage.load(&PAY_METHOD)?;
            let handles = state.storage.load(&PAY_HANDLES)?;
            println!("{} ({})", method.label(), method);
            println!("{}", handles.target(method));
            return Ok(());
        }
        GiveCommand::Handle { name, value } => {
            state.storage.update(&PAY_HANDLES, |handles| handles.set(&name, &value))?;
            println!("Updated {}", name.trim());
            return Ok(());
        }
        GiveCommand::Links => {
            let handles = state.storage.load(&PAY_HANDLES)?;
            let preferred = state.storage.load(&PAY_METHOD)?;
            for method in PayMethod::ALL {
                let marker = if method == preferred { "*" } else { " " };
                let target = handles.target(method).replace('\n', ", ");
                println!("{marker} {:<16} {target}", method.label());
                if handles.show_qr && method != PayMethod::Mail {
                    println!("  {:<16} {}", "QR", giving::qr_url(&handles.target(method)));
                }
            }
            println!("  {:<16} {}", "Cashtag", handles.cashtag());
            return Ok(());
        }
    }

    let raised = state.storage.load(&RAISED)?;
    let goal = state.storage.load(&GOAL)?;
    println!("${raised} raised of ${goal} goal ({}%)", giving::progress_percent(raised, goal));
    Ok(())
}
