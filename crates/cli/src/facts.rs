use std::{collections::HashMap, fs::File, io::Write, path::Path};

use vtm::{measure_with_debug, MeasureConfig, MeasurementKey, MeasurementResult, SliceDebug};
use vtm_mesh::JointSet;

use crate::args;

pub fn measure_command(args: args::MeasureArgs) -> anyhow::Result<()> {
    let verts = vtm_verts::read_verts(&args.verts_path)?;
    let joints = match &args.joints {
        Some(path) => {
            let positions = vtm_verts::read_verts(path)?;
            Some(JointSet::new(
                positions,
                HashMap::from([("pelvis".to_string(), args.pelvis_index)]),
            ))
        }
        None => None,
    };

    let config = MeasureConfig::default();
    let results: Vec<(MeasurementKey, MeasurementResult, SliceDebug)> = MeasurementKey::ALL
        .iter()
        .map(|&key| {
            let (res, debug) = measure_with_debug(&verts, key, joints.as_ref(), &config);
            (key, res, debug)
        })
        .collect();

    write_facts(&args.output, &results, args.debug)?;
    Ok(())
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn json_opt_f64(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{}", v),
        None => "null".to_string(),
    }
}

/// Hand-writes the facts-summary artifact. Values arrive already quantized
/// to 0.001 m, so this serializer performs no rounding of its own beyond
/// fixing the decimal width.
fn write_facts<P: AsRef<Path>>(
    p: P,
    results: &[(MeasurementKey, MeasurementResult, SliceDebug)],
    with_debug: bool,
) -> std::io::Result<()> {
    let mut f = File::create(p)?;
    writeln!(f, "{{")?;
    writeln!(f, "  \"schema_version\": \"body_measurements_subset.v0\",")?;

    let keys = results
        .iter()
        .map(|(key, _, _)| format!("\"{}\"", key.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(f, "  \"keys\": [{}],", keys)?;

    writeln!(f, "  \"measurements\": {{")?;
    for (i, (key, res, debug)) in results.iter().enumerate() {
        writeln!(f, "    \"{}\": {{", key.as_str())?;
        match res.value_m {
            Some(v) => writeln!(f, "      \"value_m\": {:.3},", v)?,
            None => writeln!(f, "      \"value_m\": null,")?,
        }
        let warnings = res
            .warnings
            .iter()
            .map(|w| format!("\"{}\"", json_escape(&w.to_string())))
            .collect::<Vec<_>>()
            .join(", ");
        if with_debug {
            writeln!(f, "      \"warnings\": [{}],", warnings)?;
            write_debug(&mut f, debug)?;
        } else {
            writeln!(f, "      \"warnings\": [{}]", warnings)?;
        }
        let comma = if i + 1 < results.len() { "," } else { "" };
        writeln!(f, "    }}{}", comma)?;
    }
    writeln!(f, "  }}")?;
    writeln!(f, "}}")?;
    Ok(())
}

fn write_debug(f: &mut File, debug: &SliceDebug) -> std::io::Result<()> {
    writeln!(f, "      \"debug\": {{")?;
    writeln!(f, "        \"method\": \"{}\",", debug.method)?;
    writeln!(f, "        \"plane\": \"{}\",", debug.plane)?;
    writeln!(f, "        \"axis_up\": \"{}\",", debug.axis_up)?;
    writeln!(
        f,
        "        \"y_range\": [{}, {}],",
        debug.y_range.0, debug.y_range.1
    )?;
    writeln!(f, "        \"band_width_m\": {},", debug.band_width_m)?;
    writeln!(f, "        \"n_points_raw\": {},", debug.n_points_raw)?;
    writeln!(f, "        \"n_points_deduped\": {},", debug.n_points_deduped)?;
    writeln!(f, "        \"hull_ok\": {},", debug.hull_ok)?;
    writeln!(f, "        \"perimeter_m\": {},", json_opt_f64(debug.perimeter_m))?;
    writeln!(f, "        \"width_m\": {},", json_opt_f64(debug.width_m))?;
    writeln!(f, "        \"depth_m\": {},", json_opt_f64(debug.depth_m))?;
    match debug.bbox_xz {
        Some(bbox) => writeln!(
            f,
            "        \"bbox_xz\": [[{}, {}], [{}, {}]]",
            bbox[0][0], bbox[0][1], bbox[1][0], bbox[1][1]
        )?,
        None => writeln!(f, "        \"bbox_xz\": null")?,
    }
    writeln!(f, "      }}")?;
    Ok(())
}
