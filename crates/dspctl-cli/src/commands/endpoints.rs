//! Endpoints command: load a hardware interface table and list what it holds.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dspctl_hwep::InterfaceTable;
use serde_json::{Value, json};

/// List the entries of a hardware interface table.
#[derive(Args)]
pub struct EndpointsArgs {
    /// Board interface XML file
    file: PathBuf,

    /// Only print the per-family counts
    #[arg(long)]
    summary: bool,
}

/// Run the endpoints command.
pub fn run(args: EndpointsArgs, as_json: bool) -> anyhow::Result<()> {
    let table = InterfaceTable::load(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;
    tracing::info!(path = %args.file.display(), "interface table loaded");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&to_json(&table, args.summary))?);
    } else {
        print_text(&table, args.summary);
    }
    Ok(())
}

fn to_json(table: &InterfaceTable, summary_only: bool) -> Value {
    let s = table.summary();
    let summary = json!({
        "codec_dma": s.codec_dma,
        "i2s": s.i2s,
        "tdm": s.tdm,
        "auxpcm": s.auxpcm,
        "slimbus": s.slimbus,
        "skipped": s.skipped,
    });
    if summary_only {
        return json!({ "summary": summary });
    }

    let codec_dma: Vec<Value> = table
        .codec_dma_entries()
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "link_index": e.link_index,
                "lpaif_type": e.lpaif_type,
                "intf_idx": e.intf_idx,
            })
        })
        .collect();
    let i2s: Vec<Value> = table
        .i2s_entries()
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "link_index": e.link_index,
                "lpaif_type": e.lpaif_type,
                "intf_idx": e.intf_idx,
                "sd_line_idx": e.sd_line_idx,
                "ws_src": e.ws_src,
            })
        })
        .collect();
    let tdm: Vec<Value> = table
        .tdm_entries()
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "link_index": e.link_index,
                "lpaif_type": e.lpaif_type,
                "intf_idx": e.intf_idx,
                "sync_src": e.sync_src,
                "ctrl_data_out_enable": e.ctrl_data_out_enable,
                "sync_mode": e.sync_mode,
                "ctrl_invert_sync_pulse": e.ctrl_invert_sync_pulse,
                "ctrl_sync_data_delay": e.ctrl_sync_data_delay,
            })
        })
        .collect();
    let auxpcm: Vec<Value> = table
        .auxpcm_entries()
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "link_index": e.link_index,
                "lpaif_type": e.lpaif_type,
                "intf_idx": e.intf_idx,
                "sync_src": e.sync_src,
                "ctrl_data_out_enable": e.ctrl_data_out_enable,
                "frame_setting": e.frame_setting,
                "aux_mode": e.aux_mode,
            })
        })
        .collect();
    let slimbus: Vec<Value> = table
        .slimbus_entries()
        .iter()
        .map(|e| {
            json!({
                "name": e.name,
                "link_index": e.link_index,
                "dev_id": e.dev_id,
                "shared_channels": e.shared_channels,
            })
        })
        .collect();
    let skipped: Vec<Value> = table
        .skipped()
        .iter()
        .map(|s| {
            json!({
                "family": s.family.name(),
                "line": s.line,
                "reason": s.reason.to_string(),
            })
        })
        .collect();

    json!({
        "summary": summary,
        "codec_dma": codec_dma,
        "i2s": i2s,
        "tdm": tdm,
        "auxpcm": auxpcm,
        "slimbus": slimbus,
        "skipped": skipped,
    })
}

fn print_text(table: &InterfaceTable, summary_only: bool) {
    let s = table.summary();
    println!("Interface table");
    println!("  codec-dma: {}", s.codec_dma);
    println!("  i2s:       {}", s.i2s);
    println!("  tdm:       {}", s.tdm);
    println!("  auxpcm:    {}", s.auxpcm);
    println!("  slimbus:   {}", s.slimbus);
    println!("  skipped:   {}", s.skipped);
    if summary_only {
        return;
    }

    if !table.codec_dma_entries().is_empty() {
        println!("\nCodec DMA:");
        for e in table.codec_dma_entries() {
            println!(
                "  {:<20} link={:<3} lpaif={} intf={}",
                e.name, e.link_index, e.lpaif_type, e.intf_idx
            );
        }
    }
    if !table.i2s_entries().is_empty() {
        println!("\nI2S:");
        for e in table.i2s_entries() {
            println!(
                "  {:<20} link={:<3} lpaif={} intf={} sd_line={} ws_src={}",
                e.name, e.link_index, e.lpaif_type, e.intf_idx, e.sd_line_idx, e.ws_src
            );
        }
    }
    if !table.tdm_entries().is_empty() {
        println!("\nTDM:");
        for e in table.tdm_entries() {
            println!(
                "  {:<20} link={:<3} lpaif={} intf={} sync_src={} sync_mode={}",
                e.name, e.link_index, e.lpaif_type, e.intf_idx, e.sync_src, e.sync_mode
            );
        }
    }
    if !table.auxpcm_entries().is_empty() {
        println!("\nAuxiliary PCM:");
        for e in table.auxpcm_entries() {
            println!(
                "  {:<20} link={:<3} lpaif={} intf={} frame={} mode={}",
                e.name, e.link_index, e.lpaif_type, e.intf_idx, e.frame_setting, e.aux_mode
            );
        }
    }
    if !table.slimbus_entries().is_empty() {
        println!("\nSLIMbus:");
        for e in table.slimbus_entries() {
            println!(
                "  {:<20} link={:<3} dev={} channels={:?}",
                e.name, e.link_index, e.dev_id, e.shared_channels
            );
        }
    }
    if !table.skipped().is_empty() {
        println!("\nSkipped:");
        for s in table.skipped() {
            println!("  line {:<5} {:<10} {}", s.line, s.family, s.reason);
        }
    }
}
