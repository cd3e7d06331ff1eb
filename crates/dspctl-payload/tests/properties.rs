//! Property-based tests for payload sizing.
//!
//! Every encoder must report a trailer size that matches the buffer it
//! returns, and every buffer must be a multiple of eight bytes long.

use dspctl_core::{Direction, MediaConfig, VolumeData};
use dspctl_payload::{
    ENVELOPE_LEN, ModuleInfo, Payload, StreamConfigTag, cop_packetizer, custom_param,
    hw_ep_media_format, in_media_format, mfc_output, out_media_format, query, rat_media_format,
    sound_model, stream_config, volume,
};
use proptest::prelude::*;

const RATES: &[u32] = &[8000, 16000, 32000, 44100, 48000, 96000, 192000, 384000];

fn assert_well_formed(payload: &Payload) {
    let env = payload.envelope();
    assert_eq!(payload.len() % 8, 0, "length {} not aligned", payload.len());
    assert!(payload.padding() < 8);
    assert_eq!(
        env.param_size as usize,
        payload.len() - ENVELOPE_LEN - payload.padding()
    );
    assert_eq!(env.error_code, 0);
    assert!(payload.as_bytes()[payload.len() - payload.padding()..]
        .iter()
        .all(|&b| b == 0));
}

fn media_strategy() -> impl Strategy<Value = MediaConfig> {
    (
        prop::sample::select(RATES),
        prop::sample::select(&[16u16, 24, 32][..]),
        1u16..=8,
        prop::sample::select(&[Direction::Output, Direction::Input, Direction::InputOutput][..]),
        any::<bool>(),
    )
        .prop_map(|(rate, width, channels, direction, native)| {
            MediaConfig::new(rate, width, channels)
                .with_direction(direction)
                .with_native(native)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Media-format encoders size themselves consistently for every
    /// supported rate, width and channel count.
    #[test]
    fn media_encoders_are_aligned(media in media_strategy(), miid in any::<u32>()) {
        let module = ModuleInfo::single(miid);
        let channels = usize::from(media.channels);

        let input = in_media_format(&module, &media).unwrap();
        assert_well_formed(&input);
        prop_assert_eq!(input.envelope().param_size as usize, 28 + channels);
        prop_assert_eq!(input.envelope().module_instance_id, miid);

        let output = out_media_format(&module, &media).unwrap();
        assert_well_formed(&output);

        let hw_ep = hw_ep_media_format(&module, &media).unwrap();
        assert_well_formed(&hw_ep);
        prop_assert_eq!(hw_ep.envelope().param_size, 12);

        let mfc = mfc_output(miid, &media).unwrap();
        assert_well_formed(&mfc);
        prop_assert_eq!(mfc.envelope().param_size as usize, 8 + 2 * channels);

        let rat = rat_media_format(miid, &media).unwrap();
        assert_well_formed(&rat);
        prop_assert_eq!(rat.envelope().param_size as usize, 16 + 2 * channels);

        let cop = cop_packetizer(miid, &media).unwrap();
        assert_well_formed(&cop);

        for tag in [
            StreamConfigTag::InMedia,
            StreamConfigTag::PcmEncoder,
            StreamConfigTag::PcmDecoder,
            StreamConfigTag::PcmConverter,
        ] {
            assert_well_formed(&stream_config(tag, &module, &media).unwrap());
        }
    }

    /// Unsupported widths never produce a payload.
    #[test]
    fn odd_widths_rejected(width in any::<u16>().prop_filter("supported", |w| ![16, 24, 32].contains(w))) {
        let media = MediaConfig::new(48000, width, 2);
        prop_assert!(in_media_format(&ModuleInfo::single(1), &media).is_err());
        prop_assert!(mfc_output(1, &media).is_err());
    }

    /// Blob encoders pad arbitrary lengths.
    #[test]
    fn blobs_are_aligned(blob in prop::collection::vec(any::<u8>(), 1..600), param_id in any::<u32>()) {
        let model = sound_model(7, &blob).unwrap();
        assert_well_formed(&model);
        prop_assert_eq!(model.trailer(), &blob[..]);

        let custom = custom_param(7, param_id, &blob).unwrap();
        assert_well_formed(&custom);
        prop_assert_eq!(custom.envelope().param_id, param_id);

        let q = query(7, param_id, blob.len()).unwrap();
        assert_well_formed(&q);
        prop_assert!(q.trailer().iter().all(|&b| b == 0));
    }

    /// Volume payloads grow by twelve bytes per pair.
    #[test]
    fn volume_sizes(mask in any::<u32>(), gain in 0.0f32..=1.0, extra in 0usize..8) {
        let mut data = VolumeData::uniform(mask, gain);
        for i in 0..extra {
            data.pairs.push(dspctl_core::ChannelVolume { channel_mask: 1 << i, gain });
        }
        let p = volume(3, &data).unwrap();
        assert_well_formed(&p);
        prop_assert_eq!(p.envelope().param_size as usize, 4 + 12 * (extra + 1));
    }
}
