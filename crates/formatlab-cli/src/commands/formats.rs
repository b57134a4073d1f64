use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use formatlab_core::{Template, TemplateDto, FIRST_NAME_ONLY, WITH_LAST_NAME};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct FormatsArgs {}

#[derive(Debug, Serialize)]
struct FormatsDto {
    with_last_name: Vec<TemplateDto>,
    first_name_only: Vec<TemplateDto>,
}

pub fn list_formats(ctx: &Context<'_>, _args: FormatsArgs) -> Result<()> {
    if ctx.json {
        return print_json(&FormatsDto {
            with_last_name: TemplateDto::from_table(&WITH_LAST_NAME),
            first_name_only: TemplateDto::from_table(&FIRST_NAME_ONLY),
        });
    }

    println!("with a last name:");
    print_table(&WITH_LAST_NAME);
    println!("first name only:");
    print_table(&FIRST_NAME_ONLY);
    println!("special characters are removed from names; a leading @ on the domain is optional");
    Ok(())
}

fn print_table(templates: &[Template]) {
    for (idx, template) in templates.iter().enumerate() {
        println!("  {}. {}", idx + 1, template.pattern());
    }
}
