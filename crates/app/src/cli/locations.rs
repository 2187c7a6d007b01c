use std::io::Write;

use clap::Args;
use salesdesk_app::context::AppContext;

use crate::cli::write_line;

#[derive(Debug, Args)]
pub(crate) struct LocationsArgs {
    #[arg(long)]
    country: Option<String>,

    /// Requires --country
    #[arg(long, requires = "country")]
    state: Option<String>,
}

pub(crate) fn run(
    args: &LocationsArgs,
    app: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let names: Vec<&str> = match (&args.country, &args.state) {
        (Some(country), Some(state)) => app
            .locations
            .cities(country, state)
            .iter()
            .map(String::as_str)
            .collect(),
        (Some(country), None) => app.locations.states(country).collect(),
        (None, _) => app.locations.countries().collect(),
    };

    for name in names {
        write_line(out, name)?;
    }

    Ok(())
}
