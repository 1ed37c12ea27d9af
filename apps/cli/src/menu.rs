//! The interactive numbered menu — the shop's day-to-day interface.
//!
//! Each mutation saves the inventory and regenerates the website, so the
//! published page never lags behind the JSON document.

use std::io::{self, BufRead, Write};

use color_eyre::eyre::Result;

use craftstall_inventory as store;
use craftstall_shared::{AppConfig, Inventory, ResolvedPaths};
use craftstall_site as site;

/// Run the menu loop until the user exits or stdin closes.
pub(crate) fn run_menu(config: &AppConfig, paths: &ResolvedPaths) -> Result<()> {
    std::fs::create_dir_all(&paths.images_dir)
        .map_err(|e| craftstall_shared::CraftstallError::io(&paths.images_dir, e))?;

    println!(
        "\n  Welcome to the {} inventory manager!",
        config.shop.name
    );

    let mut inventory = store::load(&paths.inventory_file)?;

    loop {
        print_menu(config);
        let Some(choice) = prompt("  Enter choice (1-7): ")? else {
            break;
        };
        match choice.as_str() {
            "1" => list_items(&inventory),
            "2" => add_item_flow(&mut inventory, config, paths)?,
            "3" => edit_item_flow(&mut inventory, config, paths)?,
            "4" => remove_item_flow(&mut inventory, config, paths)?,
            "5" => toggle_sold_flow(&mut inventory, config, paths)?,
            "6" => regenerate(&inventory, config, paths, true)?,
            "7" => break,
            _ => println!("\n  Invalid choice. Please try again.\n"),
        }
    }

    println!("\n  Goodbye!\n");
    Ok(())
}

fn print_menu(config: &AppConfig) {
    println!("\n{}", "=".repeat(60));
    println!("  {} INVENTORY MANAGER", config.shop.name.to_uppercase());
    println!("{}", "=".repeat(60));
    println!("  (Website auto-updates when you make changes)");
    println!(
        "
  [1] List all items
  [2] Add new item
  [3] Edit item
  [4] Remove item
  [5] Toggle sold status
  [6] Regenerate website manually
  [7] Exit
"
    );
}

// ---------------------------------------------------------------------------
// Prompting
// ---------------------------------------------------------------------------

/// Print `label`, read one line, and return it trimmed.
/// `None` means stdin closed.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Show the inventory and ask for an item number; `None` means cancelled
/// (zero, invalid input, or an empty inventory).
fn select_item(inventory: &Inventory, verb: &str) -> Result<Option<usize>> {
    if inventory.is_empty() {
        println!("\n  No items in inventory yet.\n");
        return Ok(None);
    }

    list_items(inventory);

    let Some(input) = prompt(&format!("  Enter item number to {verb} (0 to cancel): "))? else {
        return Ok(None);
    };
    let choice: usize = match input.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("  Invalid input.");
            return Ok(None);
        }
    };
    if choice == 0 {
        return Ok(None);
    }
    if choice > inventory.len() {
        println!("  Invalid selection.");
        return Ok(None);
    }
    Ok(Some(choice - 1))
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

fn list_items(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("\n  No items in inventory yet.\n");
        return;
    }

    println!("\n{}", "=".repeat(60));
    println!("  CURRENT INVENTORY");
    println!("{}", "=".repeat(60));
    for (i, item) in inventory.items.iter().enumerate() {
        let status = if item.sold { "SOLD" } else { "Available" };
        println!("\n  [{}] {}", i + 1, item.title);
        println!("      ID: {}", item.id);
        println!("      Price: {}", site::format_price(item.price));
        println!("      Status: {status}");
        println!("      Description: {}", preview(&item.description, 50));
        println!(
            "      Image: {}",
            item.image.as_deref().unwrap_or("No image")
        );
    }
    println!("\n{}\n", "=".repeat(60));
}

/// First `max` characters of `text`, with an ellipsis when truncated.
fn preview(text: &str, max: usize) -> String {
    if text.is_empty() {
        return "N/A".to_string();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

fn add_item_flow(
    inventory: &mut Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("  ADD NEW ITEM");
    println!("{}", "=".repeat(60));

    let Some(title) = prompt("\n  Enter item title: ")? else {
        return Ok(());
    };
    if title.is_empty() {
        println!("  Title cannot be empty. Cancelled.");
        return Ok(());
    }

    let Some(description) = prompt("  Enter description: ")? else {
        return Ok(());
    };

    let price = loop {
        let Some(input) = prompt("  Enter price (e.g., 5.00): $")? else {
            return Ok(());
        };
        match input.parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => break p,
            Ok(_) => println!("  Price must be positive."),
            Err(_) => println!("  Invalid price. Please enter a number."),
        }
    };

    let image = match image_options_flow(paths)? {
        FlowOutcome::Value(image) => image,
        FlowOutcome::InputClosed => return Ok(()),
    };

    match store::add_item(
        inventory,
        store::NewItem {
            title: title.clone(),
            description,
            price,
            image,
        },
    ) {
        Ok(id) => {
            persist_and_publish(inventory, config, paths)?;
            println!("\n  Item '{title}' added successfully!");
            println!("  Item ID: {id}\n");
        }
        Err(e) => println!("  {e}. Cancelled."),
    }
    Ok(())
}

/// Outcome of a sub-flow that may lose stdin mid-way.
enum FlowOutcome<T> {
    Value(T),
    InputClosed,
}

/// The add-item image menu: import a file, reference an existing one, or
/// skip.
fn image_options_flow(paths: &ResolvedPaths) -> Result<FlowOutcome<Option<String>>> {
    println!("\n  Image options:");
    println!("    [1] Enter local image path");
    println!("    [2] Enter image filename (if already in images folder)");
    println!("    [3] Skip image for now");

    let Some(choice) = prompt("\n  Choose option (1-3): ")? else {
        return Ok(FlowOutcome::InputClosed);
    };

    let image = match choice.as_str() {
        "1" => {
            let Some(raw) = prompt("  Enter full path to image: ")? else {
                return Ok(FlowOutcome::InputClosed);
            };
            let source = std::path::PathBuf::from(raw.trim_matches('"'));
            if source.is_file() {
                match craftstall_imaging::import_image(&source, &paths.images_dir) {
                    Ok(imported) => {
                        if imported.converted {
                            println!("  Converted and saved as: {}", imported.filename);
                        } else {
                            println!("  Copied as: {}", imported.filename);
                        }
                        Some(imported.filename)
                    }
                    Err(e) => {
                        println!("  Error importing image: {e}");
                        None
                    }
                }
            } else {
                println!("  File not found. Skipping image.");
                None
            }
        }
        "2" => {
            let Some(filename) = prompt("  Enter filename: ")? else {
                return Ok(FlowOutcome::InputClosed);
            };
            if filename.is_empty() {
                None
            } else if paths.images_dir.join(&filename).is_file() {
                Some(filename)
            } else {
                println!("  Warning: {filename} not found in images folder.");
                let Some(confirm) = prompt("  Continue anyway? (y/n): ")? else {
                    return Ok(FlowOutcome::InputClosed);
                };
                if confirm.eq_ignore_ascii_case("y") {
                    Some(filename)
                } else {
                    None
                }
            }
        }
        _ => None,
    };

    Ok(FlowOutcome::Value(image))
}

fn edit_item_flow(
    inventory: &mut Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<()> {
    let Some(index) = select_item(inventory, "edit")? else {
        return Ok(());
    };
    let current = inventory.items[index].clone();

    println!("\n  Editing: {}", current.title);
    println!("  (Press Enter to keep current value)\n");

    let mut patch = store::ItemPatch::default();

    let Some(title) = prompt(&format!("  Title [{}]: ", current.title))? else {
        return Ok(());
    };
    if !title.is_empty() {
        patch.title = Some(title);
    }

    let Some(description) = prompt(&format!(
        "  Description [{}]: ",
        preview(&current.description, 30)
    ))?
    else {
        return Ok(());
    };
    if !description.is_empty() {
        patch.description = Some(description);
    }

    let Some(price_input) = prompt(&format!(
        "  Price [{}]: $",
        site::format_price(current.price)
    ))?
    else {
        return Ok(());
    };
    if !price_input.is_empty() {
        match price_input.parse::<f64>() {
            Ok(price) => patch.price = Some(price),
            Err(_) => println!("  Invalid price, keeping original."),
        }
    }

    let Some(image) = prompt(&format!(
        "  Image [{}]: ",
        current.image.as_deref().unwrap_or("None")
    ))?
    else {
        return Ok(());
    };
    if !image.is_empty() {
        patch.image = Some(image);
    }

    match store::edit_item(inventory, index, patch) {
        Ok(outcome) => {
            if outcome.price_rejected {
                println!("  Invalid price, keeping original.");
            }
            persist_and_publish(inventory, config, paths)?;
            println!("\n  Item updated successfully!\n");
        }
        Err(e) => println!("  {e}. Cancelled."),
    }
    Ok(())
}

fn remove_item_flow(
    inventory: &mut Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<()> {
    let Some(index) = select_item(inventory, "remove")? else {
        return Ok(());
    };
    let title = inventory.items[index].title.clone();

    let Some(confirm) = prompt(&format!(
        "  Are you sure you want to remove '{title}'? (y/n): "
    ))?
    else {
        return Ok(());
    };
    if !confirm.eq_ignore_ascii_case("y") {
        println!("  Cancelled.\n");
        return Ok(());
    }

    store::remove_item(inventory, index)?;
    persist_and_publish(inventory, config, paths)?;
    println!("\n  Item removed successfully!\n");
    Ok(())
}

fn toggle_sold_flow(
    inventory: &mut Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<()> {
    let Some(index) = select_item(inventory, "toggle sold status")? else {
        return Ok(());
    };
    let title = inventory.items[index].title.clone();

    let sold = store::toggle_sold(inventory, index)?;
    persist_and_publish(inventory, config, paths)?;

    let status = if sold { "SOLD" } else { "Available" };
    println!("\n  '{title}' marked as: {status}\n");
    Ok(())
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// Save the inventory and quietly refresh the website.
fn persist_and_publish(
    inventory: &Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<()> {
    store::save(&paths.inventory_file, inventory)?;
    regenerate(inventory, config, paths, false)
}

/// Render and write the website; `verbose` prints the summary the explicit
/// menu action shows.
fn regenerate(
    inventory: &Inventory,
    config: &AppConfig,
    paths: &ResolvedPaths,
    verbose: bool,
) -> Result<()> {
    let html = site::render(inventory, &config.shop);
    site::write_site(&paths.site_file, &html)?;

    if verbose {
        println!("\n  Website updated: {}", paths.site_file.display());
        println!("  Total items: {}\n", inventory.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        assert_eq!(preview("", 50), "N/A");
        assert_eq!(preview("short", 50), "short");
        let long = "x".repeat(60);
        let shown = preview(&long, 50);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let text = "ému".repeat(30);
        let shown = preview(&text, 50);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 53);
    }
}
