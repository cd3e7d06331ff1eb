//! Keys command: resolve every key vector of a session description.
//!
//! A session is a TOML (or `.json`) file:
//!
//! ```toml
//! tags = ["mute", "rate-48000"]
//!
//! [stream]
//! type = "low-latency"
//! direction = "output"
//! devices = [{ id = 2 }]
//! volume = { pairs = [{ channel_mask = 3, gain = 0.5 }] }
//!
//! [device_pp]
//! low_power_island = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use dspctl_keys::{
    ControlTag, DeviceId, DevicePpKeyVectors, GraphTag, KeyValue, KeyVector, KeyVectorPair,
    StreamDescriptor, StreamSource, StreamType, TagKeyVector, VsidInfo, calibration_key_vector,
    device_pp_key_vectors, graph_key_vector, stream_calibration_key_vector,
    stream_device_key_vectors, stream_pp_key_vectors, tag_key_vector,
};
use serde::{Deserialize, Serialize};

/// Resolve the key vectors of a session file.
#[derive(Args)]
pub struct KeysArgs {
    /// Session description (TOML, or JSON with a .json extension)
    file: PathBuf,
}

/// A stream plus the routing and controls to resolve for it.
#[derive(Debug, Deserialize)]
struct Session {
    stream: StreamDescriptor,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    vsid: VsidInfo,
    /// Playback device of a two-sided graph; defaults to the first output device.
    #[serde(default)]
    rx_device: Option<u32>,
    /// Capture device of a two-sided graph; defaults to the first input device.
    #[serde(default)]
    tx_device: Option<u32>,
    #[serde(default)]
    device_pp: Option<DevicePpSection>,
}

#[derive(Debug, Deserialize)]
struct DevicePpSection {
    #[serde(default)]
    low_power_island: bool,
    #[serde(default)]
    fallback: Vec<KeyValue>,
}

/// Graph keys: one vector for single-sided streams, a pair otherwise.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GraphKeys {
    Single(KeyVector),
    Pair(KeyVectorPair),
}

#[derive(Debug, Serialize)]
struct Resolved {
    stream_type: StreamType,
    graph: GraphKeys,
    stream_pp: KeyVectorPair,
    calibration: KeyVector,
    volume_calibration: Option<KeyVector>,
    tags: Vec<TagKeyVector>,
    device_pp: Option<DevicePpKeyVectors>,
}

/// Run the keys command.
pub fn run(args: KeysArgs, as_json: bool) -> anyhow::Result<()> {
    let session = load(&args.file)?;
    let resolved = resolve(&session).map_err(|e| {
        let kind = e.kind();
        anyhow::Error::new(e).context(format!("resolving {} ({kind})", args.file.display()))
    })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        print_text(&resolved);
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Session> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let session = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    } else {
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), "session loaded");
    Ok(session)
}

/// First routed device on the requested side, or 0 when there is none.
fn first_device(stream: &StreamDescriptor, input: bool) -> u32 {
    stream
        .devices
        .iter()
        .find(|d| DeviceId::from_raw(d.id).is_some_and(|id| id.is_input() == input))
        .map_or(0, |d| d.id)
}

fn resolve(session: &Session) -> dspctl_keys::Result<Resolved> {
    let stream = &session.stream;
    let attrs = stream.attributes()?;
    let rx_device = session
        .rx_device
        .unwrap_or_else(|| first_device(stream, false));
    let tx_device = session
        .tx_device
        .unwrap_or_else(|| first_device(stream, true));

    let graph = match attrs.stream_type {
        StreamType::VoiceCall | StreamType::Loopback => GraphKeys::Pair(
            stream_device_key_vectors(stream, rx_device, tx_device, &session.vsid)?,
        ),
        _ => GraphKeys::Single(graph_key_vector(stream)?),
    };

    let volume_calibration = if stream.volume.is_some() {
        Some(calibration_key_vector(stream, GraphTag::StreamVolume)?)
    } else {
        None
    };

    let tags = session
        .tags
        .iter()
        .map(|s| s.parse::<ControlTag>().and_then(|tag| tag_key_vector(&attrs, tag)))
        .collect::<dspctl_keys::Result<Vec<_>>>()?;

    let device_pp = match &session.device_pp {
        Some(pp) => Some(device_pp_key_vectors(
            stream,
            rx_device,
            tx_device,
            &pp.fallback,
            pp.low_power_island,
        )?),
        None => None,
    };

    Ok(Resolved {
        stream_type: attrs.stream_type,
        graph,
        stream_pp: stream_pp_key_vectors(&attrs),
        calibration: stream_calibration_key_vector(),
        volume_calibration,
        tags,
        device_pp,
    })
}

fn join(kv: &[KeyValue]) -> String {
    if kv.is_empty() {
        return "(none)".to_string();
    }
    kv.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn print_text(r: &Resolved) {
    println!("Stream: {}", r.stream_type);
    match &r.graph {
        GraphKeys::Single(kv) => println!("  graph:          {}", join(kv)),
        GraphKeys::Pair(pair) => {
            println!("  graph rx:       {}", join(&pair.rx));
            println!("  graph tx:       {}", join(&pair.tx));
        }
    }
    println!("  stream pp rx:   {}", join(&r.stream_pp.rx));
    println!("  stream pp tx:   {}", join(&r.stream_pp.tx));
    println!("  calibration:    {}", join(&r.calibration));
    if let Some(kv) = &r.volume_calibration {
        println!("  volume cal:     {}", join(kv));
    }
    if !r.tags.is_empty() {
        println!("\nTags:");
        for t in &r.tags {
            println!("  {:?} {}: {}", t.tag, t.tag, join(&t.kv));
        }
    }
    if let Some(pp) = &r.device_pp {
        println!("\nDevice pp:");
        println!("  rx: {}", join(&pp.rx));
        println!("  tx: {}", join(&pp.tx));
        if !pp.unsupported.is_empty() {
            println!("  unsupported devices: {:?}", pp.unsupported);
        }
    }
}
