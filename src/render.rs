use std::fmt::Write;

use tuya::TuyaFrame;
use tuya::frame::TuyaCommand;
use zcl::cluster::cluster_name;
use zcl::{DecodedAttribute, RawCommandHeader};

use crate::config::OutputFormat;
use crate::error::ApiResult;
use crate::message::Decoded;

fn cluster_label(cluster_id: u16) -> String {
    cluster_name(cluster_id).map_or_else(
        || format!("{cluster_id:04x}"),
        |name| format!("{cluster_id:04x} ({name})"),
    )
}

fn attribute_line(out: &mut String, attr: &DecodedAttribute) {
    let _ = write!(
        out,
        "  {:04x} {} [{}] = {}{}",
        attr.attribute_id, attr.name, attr.type_name, attr.value, attr.unit
    );
    if attr.value != attr.raw_value {
        let _ = write!(out, " (raw {})", attr.raw_value);
    }
    if let Some(err) = &attr.conversion_error {
        let _ = write!(out, " (conversion failed: {err})");
    }
    out.push('\n');
}

fn tuya_command(cmd: Option<TuyaCommand>, raw: u8) -> String {
    cmd.map_or_else(|| format!("cmd {raw:02x}"), |cmd| format!("{cmd:?}"))
}

fn tuya_lines(out: &mut String, frame: &TuyaFrame) {
    match frame {
        TuyaFrame::Short(frame) => {
            let _ = writeln!(
                out,
                "tuya heartbeat: seq {}, {}",
                frame.seq,
                tuya_command(frame.command(), frame.cmd)
            );
        }
        TuyaFrame::Datapoint(dp) => {
            let _ = writeln!(
                out,
                "tuya {}: seq {}, dp {} {} [{:?}] = {}",
                tuya_command(dp.command(), dp.cmd),
                dp.seq,
                dp.dp_id,
                dp.name,
                dp.dtype,
                dp.formatted
            );
            if let Some(err) = &dp.conversion_error {
                let _ = writeln!(out, "  conversion failed: {err}");
            }
        }
    }
}

fn raw_lines(out: &mut String, hdr: &RawCommandHeader) {
    let command = hdr
        .command()
        .map_or_else(|| format!("cmd {:02x}", hdr.cmd), |cmd| format!("{cmd:?}"));

    let _ = writeln!(
        out,
        "raw {command}: {}, seq {}, cluster {}, profile {:04x}",
        hdr.direction,
        hdr.seqnr,
        cluster_label(hdr.cluster_id),
        hdr.profile_id
    );
    if let Some(mfcode) = hdr.mfcode {
        let _ = writeln!(out, "  manufacturer {mfcode:04x}");
    }
    let _ = writeln!(out, "  payload {}", hex::encode(&hdr.payload));
}

/// Human-readable rendering, one line per decoded item
#[must_use]
pub fn text(decoded: &Decoded) -> String {
    let mut out = String::new();

    match decoded {
        Decoded::Attributes { cluster_id, attrs } => {
            let _ = writeln!(out, "cluster {}:", cluster_label(*cluster_id));
            for attr in attrs {
                attribute_line(&mut out, attr);
            }
            if let Some(last) = attrs.last().filter(|attr| attr.has_trailing()) {
                let _ = writeln!(out, "  trailing {}", hex::encode(&last.trailing));
            }
        }
        Decoded::Tuya(frame) => tuya_lines(&mut out, frame),
        Decoded::Raw(hdr) => raw_lines(&mut out, hdr),
    }

    out
}

pub fn render(decoded: &Decoded, format: OutputFormat) -> ApiResult<String> {
    match format {
        OutputFormat::Text => Ok(text(decoded)),
        OutputFormat::Json => Ok(serde_json::to_string(decoded)? + "\n"),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::OutputFormat;
    use crate::message::{MessageKind, decode_message, parse_hex};
    use crate::render::{render, text};

    #[test]
    fn attributes_text() {
        let data = parse_hex("21002064").unwrap();
        let decoded = decode_message(MessageKind::SetAttrValue, 0x0001, &data, true).unwrap();
        assert_eq!(
            text(&decoded),
            "cluster 0001 (PowerConfiguration):\n  0021 Battery Percentage Remaining [U8] = 50.0% (raw 100)\n"
        );
    }

    #[test]
    fn attributes_with_trailing() {
        let data = parse_hex("21002064ff").unwrap();
        let decoded = decode_message(MessageKind::SetAttrValue, 0x0001, &data, false).unwrap();
        assert!(text(&decoded).ends_with("  trailing ff\n"));
    }

    #[test]
    fn tuya_text() {
        let data = parse_hex("020102020004000000e1").unwrap();
        let decoded = decode_message(MessageKind::CustomCommand, 0xef00, &data, true).unwrap();
        assert_eq!(
            text(&decoded),
            "tuya SetData: seq 1, dp 2 target_temperature [Value] = 22.5°C\n"
        );

        let decoded = decode_message(MessageKind::CustomCommand, 0xef00, &[5, 9], true).unwrap();
        assert_eq!(text(&decoded), "tuya heartbeat: seq 5, cmd 09\n");
    }

    #[test]
    fn raw_text() {
        let data = parse_hex("0a01070100010210040100efdead").unwrap();
        let decoded = decode_message(MessageKind::Raw, 0, &data, true).unwrap();
        assert_eq!(
            text(&decoded),
            "raw ReportAttrib: server->client, seq 7, cluster ef00 (TuyaPrivate), profile 0104\n  manufacturer 1002\n  payload dead\n"
        );
    }

    #[test]
    fn json_output() {
        let data = parse_hex("020102020004000000e1").unwrap();
        let decoded = decode_message(MessageKind::CustomCommand, 0xef00, &data, true).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(&decoded, OutputFormat::Json).unwrap()).unwrap();

        assert_eq!(json["kind"], "tuya");
        assert_eq!(json["frame"], "datapoint");
        assert_eq!(json["dp_id"], 2);
        assert_eq!(json["dtype"], "value");
        assert_eq!(json["raw"], "000000e1");
        assert_eq!(json["formatted"], "22.5°C");
    }
}
