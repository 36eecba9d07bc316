//! Classify command implementation

use anyhow::Result;
use tally_core::classify::{classify_detailed, Anchor};

pub fn cmd_classify(description: &str) -> Result<()> {
    let classification = classify_detailed(description);
    let tx = &classification.transaction;

    println!("🔎 {}", description);
    println!("   Label: {}", or_dash(tx.label()));
    println!("   Type:  {}", or_dash(tx.tx_type()));
    match classification.anchor {
        Anchor::FoundAt(position) => {
            println!("   Id:    {} (token {})", tx.id(), position + 1)
        }
        Anchor::NotFound => println!("   Id:    -"),
    }
    println!("   Agent: {}", or_dash(tx.agent()));

    Ok(())
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}
