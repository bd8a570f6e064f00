//! Basic example demonstrating the Strand API client.
//!
//! Run with:
//! ```
//! STRAND_API_KEY=your-key cargo run --example basic
//! ```

use strandapi::{StrandClient, DNA_SEQUENCE, FOLDER, PROJECT};

#[tokio::main]
async fn main() -> strandapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Strand client...");
    let client = StrandClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List first page of projects
    println!("\n--- Listing Projects (first page) ---");
    let projects = PROJECT.list_page(&client, &[], 10, None).await?;
    println!(
        "Found {} projects{}",
        projects.len(),
        if projects.has_more() { " (more available)" } else { "" }
    );

    for project in &projects {
        println!(
            "  - {} ({})",
            project.as_str("name").unwrap_or("unnamed"),
            project.id().unwrap_or("?")
        );
    }

    let Some(first_project) = projects.items.first() else {
        println!("\nNo projects visible to this API key. Done!");
        return Ok(());
    };

    // Get the project again by id and show who owns it
    println!("\n--- Getting Project Details ---");
    let project = PROJECT.get(&client, first_project.id().unwrap_or_default()).await?;
    println!("Project: {}", project.as_str("name").unwrap_or("unnamed"));
    if let Some(owner) = project.nested("owner") {
        println!("  Owner: {}", owner.as_str("name").unwrap_or("unknown"));
    }
    if let Some(team) = project.nested("team") {
        println!("  Team: {}", team.as_str("name").unwrap_or("unknown"));
    }

    // List folders inside that project
    println!("\n--- Listing Folders ---");
    let project_id = project.id().unwrap_or_default();
    let folders = FOLDER
        .list_page(&client, &[("projectId", project_id)], 10, None)
        .await?;
    println!("Found {} folders", folders.len());

    for folder in &folders {
        println!(
            "  - {} ({})",
            folder.as_str("name").unwrap_or("unnamed"),
            folder.id().unwrap_or("?")
        );
    }

    // Drill into the first folder's sequences
    if let Some(folder) = folders.items.first() {
        println!("\n--- Listing DNA Sequences ---");
        let folder_id = folder.id().unwrap_or_default();
        let sequences = DNA_SEQUENCE
            .list_page(&client, &[("folderId", folder_id)], 10, None)
            .await?;
        println!("Found {} sequences", sequences.len());

        if let Some(summary) = sequences.items.first() {
            let sequence = DNA_SEQUENCE
                .get(&client, summary.id().unwrap_or_default())
                .await?;

            println!("\n--- Sequence Details ---");
            println!("  Name: {}", sequence.as_str("name").unwrap_or("unnamed"));
            println!("  Length: {} bp", sequence.as_i64("length").unwrap_or(0));
            println!(
                "  Topology: {}",
                if sequence.as_bool("isCircular").unwrap_or(false) {
                    "circular"
                } else {
                    "linear"
                }
            );
            if let Some(created) = sequence.as_datetime("createdAt") {
                println!("  Created: {}", created.format("%Y-%m-%d %H:%M UTC"));
            }
            if let Some(creator) = sequence.nested("creator") {
                println!("  Creator: {}", creator.as_str("handle").unwrap_or("unknown"));
            }

            // Show first 5 annotations
            if let Some(annotations) = sequence.nested_list("annotations") {
                println!("\nFirst 5 annotations ({} total):", annotations.len());
                for annotation in annotations.iter().take(5) {
                    println!(
                        "  - {} [{}] {}..{} strand {}",
                        annotation.as_str("name").unwrap_or("unnamed"),
                        annotation.as_str("type").unwrap_or("feature"),
                        annotation.as_i64("start").unwrap_or(0),
                        annotation.as_i64("end").unwrap_or(0),
                        annotation.as_i64("strand").unwrap_or(0),
                    );
                }
            }

            if let Some(primers) = sequence.nested_list("primers") {
                println!("Primers: {}", primers.len());
            }
        }
    }

    println!("\nDone!");
    Ok(())
}
