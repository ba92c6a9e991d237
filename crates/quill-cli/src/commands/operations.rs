//! Operations command

use quill_server::operations::get_operations;

use crate::output::{format_output, OutputFormat};
use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let operations = get_operations();

    match ctx.format {
        OutputFormat::Json => println!("{}", format_output(&operations, ctx.format)),
        OutputFormat::Pretty => {
            let width = operations.iter().map(|o| o.name.len()).max().unwrap_or(0);
            for op in &operations {
                println!(
                    "{:<width$}  {:<8}  {:<10}  {}",
                    op.name,
                    op.kind.as_str(),
                    op.returns,
                    op.description,
                    width = width
                );
            }
        }
    }

    Ok(())
}
