//! Integration tests for the dspctl binary.
//!
//! Each test writes its inputs to a temporary directory and runs the built
//! binary against them.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to get the path to the `dspctl` binary built by cargo.
fn dspctl_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dspctl"))
}

fn run(args: &[&str]) -> Output {
    dspctl_bin()
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run dspctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

const BOARD: &str = r#"<?xml version="1.0"?>
<hw_ep_info>
    <codec_hw_intf name="cdc-pri" lpaif_type="LPAIF_WSA" intf_idx="CODEC_RX0"/>
    <codec_hw_intf name="cdc-sec" intf_idx="CODEC_TX2" lpaif_type="LPAIF_VA"/>
    <tdm_hw_intf name="tdm-sec" lpaif_type="LPAIF" sync_src="TDM_SYNC_SRC_INTERNAL"
        ctrl_data="TDM_CTRL_DATA_OE_DISABLE" sync_mode="TDM_SHORT_SYNC_BIT_MODE"
        ctrl_invert_sync_pulse="TDM_SYNC_NORMAL" ctrl_sync_data_delay="TDM_DATA_DELAY_0_BCLK_CYCLE"/>
    <slim_hw_intf name="slim-0-rx" slim_dev_id="SLIMBUS_DEVICE_2" index_0="SLIM_RX0" index_1="SLIM_RX1"/>
</hw_ep_info>
"#;

// ---------------------------------------------------------------------------
// dspctl endpoints
// ---------------------------------------------------------------------------

#[test]
fn endpoints_lists_entries_and_skips() {
    let dir = TempDir::new().unwrap();
    let board = write(&dir, "board.xml", BOARD);

    let output = run(&["endpoints", board.to_str().unwrap()]);
    assert!(output.status.success(), "endpoints failed: {output:?}");

    let out = stdout(&output);
    assert!(out.contains("codec-dma: 1"), "{out}");
    assert!(out.contains("tdm:       1"), "{out}");
    assert!(out.contains("slimbus:   1"), "{out}");
    assert!(out.contains("skipped:   1"), "{out}");
    assert!(out.contains("cdc-pri"), "{out}");
    assert!(out.contains("Skipped:"), "{out}");
}

#[test]
fn endpoints_json_summary() {
    let dir = TempDir::new().unwrap();
    let board = write(&dir, "board.xml", BOARD);

    let output = run(&["--json", "endpoints", "--summary", board.to_str().unwrap()]);
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["summary"]["codec_dma"], 1);
    assert_eq!(v["summary"]["i2s"], 0);
    assert_eq!(v["summary"]["skipped"], 1);
    assert!(v.get("codec_dma").is_none());
}

#[test]
fn endpoints_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.xml");
    let output = run(&["endpoints", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.xml"));
}

// ---------------------------------------------------------------------------
// dspctl payload
// ---------------------------------------------------------------------------

#[test]
fn payload_media_format_json() {
    let output = run(&[
        "--json", "payload", "in-media", "--miid", "0x4a01", "--rate", "44100", "--width",
        "24", "--channels", "2",
    ]);
    assert!(output.status.success(), "{output:?}");

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["kind"], "in-media");
    assert_eq!(v["module_instance_id"], 0x4a01);
    assert_eq!(v["param_id"], 0x0800_100C);
    let len = v["length"].as_u64().unwrap();
    assert_eq!(len % 8, 0);
    assert_eq!(v["bytes"].as_str().unwrap().len() as u64, len * 2);
    // Envelope starts with the little-endian instance id.
    assert!(v["bytes"].as_str().unwrap().starts_with("014a0000"));
}

#[test]
fn payload_pause_is_header_only() {
    let output = run(&["payload", "pause"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Payload: pause"), "{out}");
    assert!(out.contains("param size:      0 bytes"), "{out}");
    assert!(out.contains("0x0800102e"), "{out}");
}

#[test]
fn payload_endpoint_from_board() {
    let dir = TempDir::new().unwrap();
    let board = write(&dir, "board.xml", BOARD);

    let output = run(&[
        "--json",
        "payload",
        "endpoint",
        "--xml",
        board.to_str().unwrap(),
        "--name",
        "tdm-sec",
    ]);
    assert!(output.status.success(), "{output:?}");

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["param_id"], 0x0800_101A);
    assert_eq!(v["param_size"], 28);
}

#[test]
fn payload_unknown_endpoint_reports_kind() {
    let dir = TempDir::new().unwrap();
    let board = write(&dir, "board.xml", BOARD);

    let output = run(&[
        "payload",
        "endpoint",
        "--xml",
        board.to_str().unwrap(),
        "--name",
        "usb-rx",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration-not-found"), "{stderr}");
}

#[test]
fn payload_bad_width_is_unsupported() {
    let output = run(&["payload", "hw-ep", "--width", "8"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported-combination"), "{stderr}");
}

#[test]
fn payload_sound_model_from_file() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("model.bin");
    std::fs::write(&model, [0xAAu8; 13]).unwrap();

    let output = run(&[
        "--json",
        "payload",
        "sound-model",
        "--blob",
        model.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");
    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["param_size"], 13);
    assert_eq!(v["padding"], 3);
}

#[test]
fn payload_sound_model_without_blob_fails() {
    let output = run(&["payload", "sound-model"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed-input"), "{stderr}");
}

// ---------------------------------------------------------------------------
// dspctl keys
// ---------------------------------------------------------------------------

const PLAYBACK_SESSION: &str = r#"
tags = ["mute", "rate-48000"]

[stream]
type = "low-latency"
direction = "output"
devices = [{ id = 2 }]
volume = { pairs = [{ channel_mask = 3, gain = 0.5 }] }

[device_pp]
low_power_island = false
"#;

#[test]
fn keys_playback_session_text() {
    let dir = TempDir::new().unwrap();
    let session = write(&dir, "session.toml", PLAYBACK_SESSION);

    let output = run(&["keys", session.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");

    let out = stdout(&output);
    assert!(out.contains("Stream: low-latency"), "{out}");
    assert!(
        out.contains("STREAMRX=PCM_LL_PLAYBACK, INSTANCE=1, DEVICERX=SPEAKER"),
        "{out}"
    );
    assert!(out.contains("calibration:    VOLUME=0"), "{out}");
    assert!(out.contains("volume cal:     VOLUME=3"), "{out}");
    assert!(out.contains("MUTE=1"), "{out}");
    assert!(out.contains("SAMPLINGRATE=48000"), "{out}");
    assert!(out.contains("DEVICEPP_RX=DEVICEPP_RX_AUDIO_MBDRC"), "{out}");
}

#[test]
fn keys_voice_call_json() {
    let dir = TempDir::new().unwrap();
    let session = write(
        &dir,
        "call.json",
        r#"{
            "stream": {
                "type": "voice-call",
                "direction": "input-output",
                "vsid": 297816064,
                "devices": [{ "id": 1 }, { "id": 17 }]
            },
            "vsid": { "mode_pairs": [{ "key": 297816064, "value": 1 }] }
        }"#,
    );

    let output = run(&["--json", "keys", session.to_str().unwrap()]);
    assert!(output.status.success(), "{output:?}");

    let v: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(v["stream_type"], "voice-call");
    let rx = v["graph"]["rx"].as_array().unwrap();
    let tx = v["graph"]["tx"].as_array().unwrap();
    // Session key published on both halves, device key last.
    assert!(rx.iter().any(|kv| kv["key"] == 0xB300_0000u32 && kv["value"] == 1));
    assert!(tx.iter().any(|kv| kv["key"] == 0xB300_0000u32 && kv["value"] == 1));
    assert_eq!(rx.last().unwrap()["key"], 0xA200_0000u32);
    assert_eq!(tx.last().unwrap()["key"], 0xA300_0000u32);
    assert_eq!(v["stream_pp"]["rx"][0]["value"], 0xAF00_0001u32);
    assert!(v["volume_calibration"].is_null());
    assert!(v["device_pp"].is_null());
}

#[test]
fn keys_unknown_tag_fails() {
    let dir = TempDir::new().unwrap();
    let session = write(
        &dir,
        "bad.toml",
        r#"
tags = ["rate-11025"]

[stream]
type = "deep-buffer"
"#,
    );

    let output = run(&["keys", session.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed-input"), "{stderr}");
}

#[test]
fn keys_capture_on_deep_buffer_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let session = write(
        &dir,
        "capture.toml",
        r#"
[stream]
type = "deep-buffer"
direction = "input"
"#,
    );

    let output = run(&["keys", session.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported-combination"), "{stderr}");
}
