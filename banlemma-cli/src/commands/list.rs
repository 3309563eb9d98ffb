//! List command implementation

use super::ListCommands;
use anyhow::Result;
use banlemma_core::{Category, WordClass};

/// Tag routing rules, in matching order
const TAG_ROUTES: [(&str, Category); 7] = [
    ("PPR", Category::Pronoun),
    ("PP", Category::Postposition),
    ("N*", Category::Noun),
    ("V*", Category::Verb),
    ("R*", Category::Adverb),
    ("J*", Category::Adjective),
    ("*", Category::Unclassified),
];

/// Print the requested listing
pub fn execute(subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Categories => {
            println!("Parts of speech:");
            for class in WordClass::ALL {
                let category = class.category();
                println!(
                    "  {:<14} {:<14} /{}",
                    class.as_str(),
                    category.to_string(),
                    category.tag_label()
                );
            }
        }
        ListCommands::Tags => {
            println!("Tag routing:");
            for (tag, category) in TAG_ROUTES {
                println!(
                    "  {:<6} {:<14} /{}",
                    tag,
                    category.to_string(),
                    category.tag_label()
                );
            }
        }
    }
    Ok(())
}
