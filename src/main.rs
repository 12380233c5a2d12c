use std::path::PathBuf;

use clap::{Parser, Subcommand};

use plantstock::core::db::{InventoryDb, PlantaRepository};
use plantstock::entry::{PlantaDetails, PlantaEntryForm};

#[derive(Parser)]
#[command(name = "plantstock")]
#[command(about = "Manage a plant inventory")]
struct Cli {
    /// Path to the inventory database file
    #[arg(long, value_name = "FILE", default_value = "inventory.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a planta to the inventory
    Add {
        name: String,
        price: String,
        quantity: String,
    },
    /// List all plantas
    List,
    /// Remove a planta by id
    Remove { id: i64 },
    /// Launch the graphical interface
    #[cfg(feature = "gui")]
    Gui,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Cli::parse();

    // iced brings its own runtime, so only the non-GUI paths get one here.
    match args.command {
        #[cfg(feature = "gui")]
        Command::Gui => {
            plantstock::gui::run(args.db)?;
            Ok(())
        }
        _ => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_command(args))
        }
    }
}

async fn run_command(args: Cli) -> anyhow::Result<()> {
    let db = InventoryDb::new(&args.db).await?;
    match args.command {
        Command::Add {
            name,
            price,
            quantity,
        } => {
            let form = PlantaEntryForm::new(db.clone());
            form.update_ui_state(PlantaDetails {
                id: 0,
                name,
                price,
                quantity,
            });
            if !form.ui_state().is_valid {
                anyhow::bail!("name, price and quantity must all be non-blank");
            }
            form.save_item().await?;
        }
        Command::List => {
            let plantas = db.get_plantas().await?;
            if plantas.is_empty() {
                println!("Inventory is empty.");
            }
            for planta in &plantas {
                println!(
                    "{:>4}  {:<24} {:>12}  x{}",
                    planta.id,
                    planta.name,
                    planta.formatted_price(),
                    planta.quantity
                );
            }
        }
        Command::Remove { id } => match db.get_planta_by_id(id).await? {
            Some(planta) => {
                db.delete_planta(planta).await?;
                println!("Removed planta {id}");
            }
            None => anyhow::bail!("No planta with id {id}"),
        },
        #[cfg(feature = "gui")]
        Command::Gui => unreachable!("handled before starting the runtime"),
    }
    db.close().await?;
    Ok(())
}
