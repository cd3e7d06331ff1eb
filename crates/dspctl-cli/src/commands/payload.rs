//! Payload command: encode one parameter payload and show its bytes.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use dspctl_core::{Direction, MediaConfig, SpeakerRotation, VolumeData};
use dspctl_hwep::InterfaceTable;
use dspctl_payload::{ModuleInfo, Payload, StreamConfigTag};
use serde_json::json;

use super::common::{hex_dump, hex_string, parse_u32};

/// Payload kinds the CLI can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// Stream input media format
    InMedia,
    /// PCM encoder/decoder/converter output format
    OutMedia,
    /// Hardware endpoint media format
    HwEp,
    /// Media-format converter output
    Mfc,
    /// Rate-adapted timer media format
    Rat,
    /// COP packetizer media format
    Cop,
    /// Interface configuration of a named endpoint (needs --xml and --name)
    Endpoint,
    /// Multichannel volume gain
    Volume,
    /// Soft pause start
    Pause,
    /// Soft pause resume
    Resume,
    /// Session time query
    Timestamp,
    /// Direction-of-arrival query
    Doa,
    /// Detection engine reset
    EngineReset,
    /// Detection engine sound model (needs --blob)
    SoundModel,
    /// Detection engine event configuration
    Event,
}

impl PayloadKind {
    fn name(self) -> &'static str {
        match self {
            PayloadKind::InMedia => "in-media",
            PayloadKind::OutMedia => "out-media",
            PayloadKind::HwEp => "hw-ep",
            PayloadKind::Mfc => "mfc",
            PayloadKind::Rat => "rat",
            PayloadKind::Cop => "cop",
            PayloadKind::Endpoint => "endpoint",
            PayloadKind::Volume => "volume",
            PayloadKind::Pause => "pause",
            PayloadKind::Resume => "resume",
            PayloadKind::Timestamp => "timestamp",
            PayloadKind::Doa => "doa",
            PayloadKind::EngineReset => "engine-reset",
            PayloadKind::SoundModel => "sound-model",
            PayloadKind::Event => "event",
        }
    }
}

/// Media direction as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Playback
    Output,
    /// Capture
    Input,
    /// Loopback
    Loopback,
}

impl From<DirectionArg> for Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::Output => Direction::Output,
            DirectionArg::Input => Direction::Input,
            DirectionArg::Loopback => Direction::InputOutput,
        }
    }
}

/// Encode a single payload.
#[derive(Args)]
pub struct PayloadArgs {
    /// Payload to encode
    #[arg(value_enum)]
    kind: PayloadKind,

    /// Target module instance id (decimal or 0x hex)
    #[arg(long, default_value = "0x4001", value_parser = parse_u32)]
    miid: u32,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 48000)]
    rate: u32,

    /// Bit width (16, 24 or 32)
    #[arg(short, long, default_value_t = 16)]
    width: u16,

    /// Channel count
    #[arg(short, long, default_value_t = 2)]
    channels: u16,

    /// Media direction
    #[arg(long, value_enum, default_value = "output")]
    direction: DirectionArg,

    /// Native-mode media format
    #[arg(long)]
    native: bool,

    /// Swap the stereo pair in the converter output
    #[arg(long)]
    swap: bool,

    /// Board interface XML (endpoint)
    #[arg(long)]
    xml: Option<PathBuf>,

    /// Endpoint name, e.g. cdc-pri or tdm-sec (endpoint)
    #[arg(long)]
    name: Option<String>,

    /// Linear gain (volume)
    #[arg(long, default_value_t = 1.0)]
    gain: f32,

    /// Channel mask the gain applies to (volume)
    #[arg(long, default_value = "0x3", value_parser = parse_u32)]
    mask: u32,

    /// Sound model file (sound-model)
    #[arg(long)]
    blob: Option<PathBuf>,

    /// Event mode word (event)
    #[arg(long, default_value = "0", value_parser = parse_u32)]
    event_mode: u32,
}

impl PayloadArgs {
    fn media(&self) -> MediaConfig {
        let rotation = if self.swap {
            SpeakerRotation::RightLeft
        } else {
            SpeakerRotation::LeftRight
        };
        MediaConfig::new(self.rate, self.width, self.channels)
            .with_direction(self.direction.into())
            .with_native(self.native)
            .with_rotation(rotation)
    }
}

/// Run the payload command.
pub fn run(args: PayloadArgs, as_json: bool) -> anyhow::Result<()> {
    let model = match &args.blob {
        Some(path) if args.kind == PayloadKind::SoundModel => std::fs::read(path)
            .with_context(|| format!("reading sound model {}", path.display()))?,
        _ => Vec::new(),
    };
    let payload = match encode(&args, &model) {
        Ok(p) => p,
        Err(e) => {
            let kind = e.kind();
            tracing::warn!(kind = %kind, error = %e, "encoding failed");
            return Err(
                anyhow::Error::new(e).context(format!("{} payload: {kind}", args.kind.name()))
            );
        }
    };
    let env = payload.envelope();
    tracing::debug!(
        kind = args.kind.name(),
        len = payload.len(),
        padding = payload.padding(),
        "payload encoded"
    );

    if as_json {
        let out = json!({
            "kind": args.kind.name(),
            "module_instance_id": env.module_instance_id,
            "param_id": env.param_id,
            "param_size": env.param_size,
            "length": payload.len(),
            "padding": payload.padding(),
            "bytes": hex_string(payload.as_bytes()),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Payload: {}", args.kind.name());
        println!("  module instance: {:#x}", env.module_instance_id);
        println!("  param id:        {:#010x}", env.param_id);
        println!("  param size:      {} bytes", env.param_size);
        println!(
            "  total:           {} bytes ({} padding)",
            payload.len(),
            payload.padding()
        );
        print!("{}", hex_dump(payload.as_bytes()));
    }
    Ok(())
}

fn encode(args: &PayloadArgs, model: &[u8]) -> dspctl_payload::Result<Payload> {
    let module = ModuleInfo::single(args.miid);
    let media = args.media();
    match args.kind {
        PayloadKind::InMedia => {
            dspctl_payload::stream_config(StreamConfigTag::InMedia, &module, &media)
        }
        PayloadKind::OutMedia => {
            dspctl_payload::stream_config(StreamConfigTag::PcmConverter, &module, &media)
        }
        PayloadKind::HwEp => dspctl_payload::device_config(&module, &media),
        PayloadKind::Mfc => dspctl_payload::mfc_output(args.miid, &media),
        PayloadKind::Rat => dspctl_payload::rat_media_format(args.miid, &media),
        PayloadKind::Cop => dspctl_payload::cop_packetizer(args.miid, &media),
        PayloadKind::Endpoint => {
            let xml = args
                .xml
                .as_ref()
                .ok_or(dspctl_payload::Error::Empty("--xml board file"))?;
            let name = args
                .name
                .as_deref()
                .ok_or(dspctl_payload::Error::Empty("--name endpoint"))?;
            let table = InterfaceTable::load(xml)?;
            dspctl_payload::device_endpoint_config(&table, &module, name, &media)
        }
        PayloadKind::Volume => {
            dspctl_payload::volume(args.miid, &VolumeData::uniform(args.mask, args.gain))
        }
        PayloadKind::Pause => dspctl_payload::pause(args.miid),
        PayloadKind::Resume => dspctl_payload::resume(args.miid),
        PayloadKind::Timestamp => dspctl_payload::timestamp(args.miid),
        PayloadKind::Doa => dspctl_payload::doa_info(args.miid),
        PayloadKind::EngineReset => dspctl_payload::engine_reset(args.miid),
        PayloadKind::SoundModel => dspctl_payload::sound_model(args.miid, model),
        PayloadKind::Event => dspctl_payload::event_config(args.miid, args.event_mode),
    }
}
