use std::{fs, io::Write, path::PathBuf};

use clap::Args;
use salesdesk::form::FormError;
use salesdesk_app::{
    context::AppContext,
    scripts::{OrderScript, ScriptError, StoredOrder},
};

use crate::cli::write_line;

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// YAML session script
    #[arg(long)]
    input: PathBuf,
}

pub(crate) async fn run(
    args: OrderArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let contents = fs::read_to_string(&args.input)
        .map_err(|error| format!("failed to read {}: {error}", args.input.display()))?;

    let script = OrderScript::from_yaml(&contents).map_err(|error| error.to_string())?;

    let StoredOrder { form, record } = match script.submit(app).await {
        Ok(stored) => stored,
        Err(ScriptError::Rejected {
            step,
            source: FormError::Validation(errors),
        }) => {
            write_line(
                out,
                &format!("step {} ({}) has errors:", step.number(), step.title()),
            )?;

            for (field, message) in errors.iter() {
                write_line(out, &format!("  {field}: {message}"))?;
            }

            return Err("order rejected".to_string());
        }
        Err(ScriptError::NotSignedIn) => {
            return Err("sign in first with `auth login`".to_string());
        }
        Err(error) => return Err(error.to_string()),
    };

    form.review()
        .write_to(&mut *out)
        .map_err(|error| format!("failed to render review: {error}"))?;

    write_line(
        out,
        &format!("order {} stored as {}", record.number(), record.uuid),
    )
}
