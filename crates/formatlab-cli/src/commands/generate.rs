use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use formatlab_core::{CandidateListDto, CandidateStyle, FormatRequest};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// First name (required)
    #[arg(long, short = 'f')]
    pub first: String,
    /// Last name (optional)
    #[arg(long, short = 'l')]
    pub last: Option<String>,
    /// Company domain, with or without a leading @
    #[arg(long, short = 'd')]
    pub domain: Option<String>,
    /// Drop the trailing commas from the with-last-name formats
    #[arg(long)]
    pub clean: bool,
}

pub fn generate(ctx: &Context<'_>, args: GenerateArgs) -> Result<()> {
    let domain = match args.domain.or_else(|| ctx.config.default_domain.clone()) {
        Some(domain) => domain,
        None => {
            return Err(invalid_input(
                "domain is required: pass --domain or set default_domain in the config file",
            ))
        }
    };
    let style = if args.clean {
        CandidateStyle::Clean
    } else {
        ctx.config.output.style()
    };

    let request = FormatRequest::new(&args.first, args.last.as_deref(), &domain)?;
    debug!(
        with_last_name = request.has_last_name(),
        ?style,
        "generating candidates"
    );
    let candidates = request.generate(style)?;

    if ctx.json {
        let dto = CandidateListDto::new(&request, style, candidates);
        return print_json(&dto);
    }

    eprintln!("generated email formats for {}:", request.display_name());
    println!("{}", candidates.to_block());
    Ok(())
}
