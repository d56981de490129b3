// SPDX-FileCopyrightText: 2026 h5series Contributors
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - show what a container holds without converting.

use std::path::PathBuf;

use clap::Args;

use crate::common::Result;
use h5series::container::{BackendRegistry, ContainerSource, ObjectKind};
use h5series::schema::SchemaInspector;

/// Inspect a container file.
#[derive(Args, Clone, Debug)]
pub struct InspectCmd {
    /// Container file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

impl InspectCmd {
    pub fn run(self) -> Result<()> {
        let container = BackendRegistry::with_defaults().open(&self.file)?;

        println!("File: {}", container.base_name());

        let root_attrs = container.root_attributes()?;
        println!("Root attributes: {}", root_attrs.len());
        for attr in &root_attrs {
            println!("  {} = {} ({})", attr.name, attr.value, attr.type_tag.as_str());
        }

        for entry in container.root_children()? {
            if entry.kind != ObjectKind::Group {
                println!("{}: {}", entry.kind.as_str(), entry.name);
                continue;
            }
            print_group(container.as_ref(), &entry.name)?;
        }
        Ok(())
    }
}

fn print_group(container: &dyn ContainerSource, group: &str) -> Result<()> {
    println!("Group: {group}");

    let attrs = container.group_attributes(group)?;
    for attr in &attrs {
        println!("  {} = {} ({})", attr.name, attr.value, attr.type_tag.as_str());
    }

    for child in container.group_children(group)? {
        if child.kind != ObjectKind::Dataset {
            println!("  {}: {}", child.kind.as_str(), child.name);
            continue;
        }
        let dataset = container.dataset(group, &child.name)?;
        let space = dataset.dataspace()?;
        match dataset
            .compound_layout()
            .and_then(|layout| SchemaInspector::inspect(&child.name, &layout, &space))
        {
            Ok(schema) => println!(
                "  dataset: {} ({} records, time {}, value {})",
                child.name,
                space.len(),
                schema.time.semantic,
                schema.value.semantic
            ),
            Err(e) => println!("  dataset: {} (not convertible: {e})", child.name),
        }
    }
    Ok(())
}
