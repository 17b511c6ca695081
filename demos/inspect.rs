//! Parse a few SNBT snippets and print every tag with its kind.
//!
//! Run with: cargo run --example inspect

use snbt::{from_str, Tag};
use std::error::Error;

const SAMPLES: &[&str] = &[
    "{id: \"minecraft:diamond_sword\", Count: 1b, tag: {Damage: 12s, Unbreakable: true}}",
    "[B; 19b, -42b]",
    "{Pos: [0.5d, 64.0d, -3.25d], Motion: [.5f, 0f, 0f], UUID: [I; 1, 2, 3, 4]}",
    "[125, 25b, 99bx, true, 4.3d, 512.5f, heythere, \"Hello World!]\"]",
];

fn describe(tag: &Tag, label: &str, depth: usize) {
    let pad = "  ".repeat(depth);
    match tag {
        Tag::Primitive(p) => println!("{}{}: {} = {}", pad, label, p.kind(), p),
        Tag::Array(array) => {
            println!(
                "{}{}: Array of {} ({} items)",
                pad,
                label,
                array.element_kind(),
                array.len()
            );
            for (i, element) in array.iter().enumerate() {
                describe(element, &format!("[{}]", i), depth + 1);
            }
        }
        Tag::Compound(compound) => {
            println!("{}{}: Compound ({} entries)", pad, label, compound.len());
            for (key, value) in compound {
                describe(value, key, depth + 1);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    for sample in SAMPLES {
        println!("{}", sample);
        let tag = from_str(sample)?;
        describe(&tag, "root", 1);
        println!("  compact: {}", tag);
        println!();
    }

    // Errors carry the position and an excerpt of the input.
    if let Err(err) = from_str("[asdf,,dfsf]") {
        println!("{}", err);
    }

    Ok(())
}
