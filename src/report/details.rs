/// report/details.rs — Markdown summary of a designed oligo
///
/// Presentational only: every number comes from an `OligoDesign`, nothing
/// is recomputed. Arm ranges here are genomic (1-based) as shown to the
/// user, not the slice bounds stored in the design.
use crate::oligo::OligoDesign;

/// Render the position details block shown above the oligo.
pub fn pos_details_markdown(design: &OligoDesign) -> String {
    let arm_len = design.arm_len() as i64;
    let mut md = String::new();

    md.push_str(&format!(
        "\n\n**Left arm:** `({} - {}) nt`",
        design.left_pos - arm_len,
        design.left_pos
    ));
    md.push_str(&format!(
        "\n\n**Right arm:** `({} - {}) nt`",
        design.right_pos,
        design.right_pos + arm_len
    ));
    md.push_str(&format!("\n\n**Replichore:** `{}`", design.replichore));
    md.push_str(&format!("\n\n**attB direction:** `{}`", design.direction));
    md.push_str(&format!(
        "\n\n**Oligo length:** `{} nt`",
        design.homology + design.attb_len
    ));
    md.push_str(&format!("\n\n**Oligo structure:** `{}`", design.structure()));
    md
}
