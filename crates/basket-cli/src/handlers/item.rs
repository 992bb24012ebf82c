use crate::cli::Commands;
use crate::context::CliContext;
use crate::output;
use basket_domain::{ItemFilter, ListOperations};

pub async fn handle(ctx: &mut CliContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Add { name } => {
            let item = ctx.add_item(&name)?;
            ctx.save().await?;
            output::output_success(&item);
        }
        Commands::List { filter } => {
            let filter = match filter {
                Some(raw) => raw
                    .parse::<ItemFilter>()
                    .map_err(|e| anyhow::anyhow!(e))?,
                None => ItemFilter::All,
            };
            let items = ctx.list_items(filter)?;
            output::output_list(items);
        }
        Commands::Get { id } => match ctx.get_item(id)? {
            Some(item) => output::output_success(&item),
            None => output::output_error(&format!("Item not found: {id}")),
        },
        Commands::Rename { id, name } => {
            let item = ctx.rename_item(id, &name)?;
            ctx.save().await?;
            output::output_success(&item);
        }
        Commands::Toggle { id } => {
            let item = ctx.toggle_item(id)?;
            ctx.save().await?;
            output::output_success(&item);
        }
        Commands::Remove { id } => {
            ctx.remove_item(id)?;
            ctx.save().await?;
            output::output_success(serde_json::json!({ "removed": id.to_string() }));
        }
        Commands::Clear => {
            let cleared = ctx.clear_items()?;
            ctx.save().await?;
            output::output_success(serde_json::json!({ "cleared": cleared }));
        }
        // Handled in main before a context exists.
        Commands::Completions { .. } => unreachable!("completions need no list file"),
    }
    Ok(())
}
