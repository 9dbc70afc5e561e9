//! Categories command - list spend categories and dictionary coverage.

use clap::Args;
use console::style;

use billfold_core::Category;
use billfold_core::receipt::rules::keywords::CATEGORY_KEYWORDS;

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Also list the dictionary keywords per category
    #[arg(long)]
    keywords: bool,
}

pub async fn run(args: CategoriesArgs) -> anyhow::Result<()> {
    for category in Category::ALL {
        let entry = CATEGORY_KEYWORDS.iter().find(|e| e.category == category);
        let count = entry.map(|e| e.keywords.len()).unwrap_or(0);

        println!(
            "{} {}",
            style(category.display_name()).bold(),
            style(format!("({} keywords)", count)).dim()
        );
        println!("   {}", category.description());

        if args.keywords {
            if let Some(entry) = entry {
                println!("   {}", entry.keywords.join(", "));
            }
        }
    }

    Ok(())
}
