use std::io::{BufRead, Write};

use crate::assemble::assembler::{FULL_DOCUMENT_FILENAME, assemble_full};
use crate::assemble::emit::{DirectorySink, DocumentSink, pretty};
use crate::assemble::registry::{CATALOG, find};
use crate::draft::snapshot::DraftSnapshot;
use crate::draft::storage::{DraftStorage, FileDraftStorage};
use crate::draft::store::DraftStore;
use crate::form::state::FormState;
use crate::trace::event::TraceEvent;
use crate::trace::logger::TraceLogger;

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    draft_path: &str,
    section: Option<&str>,
    output_dir: &str,
    trace_file: &str,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracer = TraceLogger::new(trace_file);
    let state = load_draft_state(draft_path, &tracer)?;
    let mut sink = DirectorySink::new(output_dir);

    match section {
        Some(name) => {
            let def = find(name)?;
            let document = (def.document)(&state)?;
            let content = pretty(&document, def.name)?;
            sink.emit(def.filename, &content)?;
            tracer.log(&TraceEvent::now("section_emitted").with_section(def.name));
            println!("Gerado: {}/{}", output_dir, def.filename);
        }
        None => {
            let documento = assemble_full(&state, &tracer)?;
            let content = pretty(&documento, "full document")?;
            sink.emit(FULL_DOCUMENT_FILENAME, &content)?;
            tracer.log(&TraceEvent::now("document_emitted"));
            println!("Gerado: {}/{}", output_dir, FULL_DOCUMENT_FILENAME);
        }
    }

    if verbose > 0 {
        eprintln!(
            "  {} inputs, {} listas no rascunho",
            state.inputs.len(),
            state.lists.len()
        );
    }
    Ok(())
}

// ============================================================================
// validate subcommand
// ============================================================================

/// Run every section assembler and return whether all passed.
pub fn cmd_validate(
    draft_path: &str,
    trace_file: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let tracer = TraceLogger::new(trace_file);
    let state = load_draft_state(draft_path, &tracer)?;

    if verbose > 0 {
        eprintln!("Validando {} seções...", CATALOG.len());
    }

    let mut all_passed = true;
    for def in CATALOG {
        match (def.document)(&state) {
            Ok(_) => println!("  [ok]   {}", def.name),
            Err(e) => {
                all_passed = false;
                println!("  [erro] {} — {}", def.name, e);
            }
        }
    }

    Ok(all_passed)
}

// ============================================================================
// sections subcommand
// ============================================================================

pub fn cmd_sections() {
    println!("{} seções:", CATALOG.len());
    for def in CATALOG {
        println!("  {:<20} -> {}", def.name, def.filename);
    }
}

// ============================================================================
// draft subcommand
// ============================================================================

pub fn cmd_draft_show(draft_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let storage = FileDraftStorage::new(draft_path);
    let Some(blob) = storage.load()? else {
        println!("Nenhum rascunho salvo.");
        return Ok(());
    };

    let snapshot = DraftSnapshot::from_blob(&blob)?;
    let filled = snapshot
        .inputs
        .values()
        .filter(|v| !v.is_empty())
        .count();
    println!(
        "Rascunho: {} inputs ({} preenchidos), {} listas",
        snapshot.inputs.len(),
        filled,
        snapshot.lists.len()
    );
    for (id, items) in &snapshot.lists {
        println!("  {:<40} {} itens", id, items.len());
    }
    Ok(())
}

pub fn cmd_draft_clear(
    draft_path: &str,
    yes: bool,
    trace_file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !yes && !confirm("Apagar rascunho da memória?")? {
        println!("Cancelado.");
        return Ok(());
    }

    let tracer = TraceLogger::new(trace_file);
    let mut store = DraftStore::new(FileDraftStorage::new(draft_path));
    store.clear(&tracer)?;
    println!("Limpo.");
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Rebuild the form state from the draft snapshot file.
fn load_draft_state(
    draft_path: &str,
    tracer: &TraceLogger,
) -> Result<FormState, Box<dyn std::error::Error>> {
    let store = DraftStore::new(FileDraftStorage::new(draft_path));
    let mut state = FormState::new();

    if !store.restore(&mut state, tracer)? {
        return Err(format!("Nenhum rascunho salvo em '{}'.", draft_path).into());
    }
    Ok(state)
}

fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{} [s/N] ", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "s" || answer == "sim")
}
