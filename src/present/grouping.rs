//! Family grouping and gradient ordering
//!
//! Groups a ranked result into fixed hue-family pages and sorts each group
//! into a hue-then-lightness gradient. The same ordering feeds both the
//! on-screen grid (fixed-size pages) and the document export (one or more
//! pages per group), so the two presentations always agree.
//!
//! Algorithm tag: `algo-family-gradient-grouping`

use crate::color::HueFamily;
use crate::constants::grid;
use crate::selection::RankedColor;

/// One entry of the fixed family-to-page mapping
///
/// Modeled as a static ordered table rather than a branching chain so new
/// groups slot in without touching the ordering logic.
#[derive(Debug, Clone, Copy)]
pub struct PageGroup {
    /// Page title, as printed in the exported document
    pub title: &'static str,
    /// Hue families collected under this group
    pub families: &'static [HueFamily],
    /// Neutral groups sort by lightness only, ignoring hue
    pub achromatic: bool,
}

/// The fixed page groups, in presentation order
pub static PAGE_GROUPS: [PageGroup; 5] = [
    PageGroup {
        title: "Tons rosés",
        families: &[HueFamily::Red, HueFamily::Magenta, HueFamily::Violet],
        achromatic: false,
    },
    PageGroup {
        title: "Tons orangés/jaunes",
        families: &[HueFamily::Orange, HueFamily::Yellow],
        achromatic: false,
    },
    PageGroup {
        title: "Tons verts",
        families: &[HueFamily::Green, HueFamily::Cyan],
        achromatic: false,
    },
    PageGroup {
        title: "Tons bleus",
        families: &[HueFamily::Blue],
        achromatic: false,
    },
    PageGroup {
        title: "Tons neutres",
        families: &[HueFamily::Grey, HueFamily::Other],
        achromatic: true,
    },
];

/// A non-empty presentation group with its sorted members
#[derive(Debug, Clone)]
pub struct PresentationGroup {
    /// The page group this slice belongs to
    pub group: &'static PageGroup,
    /// Members in gradient order
    pub entries: Vec<RankedColor>,
}

/// Group a ranked result by hue family in fixed page order
///
/// Chromatic groups sort by (hue asc, value asc, saturation desc): a
/// hue-then-lightness gradient with the most saturated color first at
/// equal hue and value. The neutral group sorts dark to light, most vivid
/// first at equal lightness. Empty groups are skipped.
pub fn group_for_presentation(entries: &[RankedColor]) -> Vec<PresentationGroup> {
    let mut groups = Vec::new();
    for page_group in PAGE_GROUPS.iter() {
        let mut members: Vec<RankedColor> = entries
            .iter()
            .filter(|e| page_group.families.contains(&e.family))
            .cloned()
            .collect();
        if members.is_empty() {
            continue;
        }
        if page_group.achromatic {
            members.sort_by(|a, b| {
                a.hsv
                    .value
                    .total_cmp(&b.hsv.value)
                    .then(b.hsv.saturation.total_cmp(&a.hsv.saturation))
            });
        } else {
            members.sort_by(|a, b| {
                a.hsv
                    .hue_deg
                    .total_cmp(&b.hsv.hue_deg)
                    .then(a.hsv.value.total_cmp(&b.hsv.value))
                    .then(b.hsv.saturation.total_cmp(&a.hsv.saturation))
            });
        }
        groups.push(PresentationGroup {
            group: page_group,
            entries: members,
        });
    }
    groups
}

/// Flatten the grouped ordering into one display sequence
pub fn presentation_order(entries: &[RankedColor]) -> Vec<RankedColor> {
    group_for_presentation(entries)
        .into_iter()
        .flat_map(|g| g.entries)
        .collect()
}

/// Split a display sequence into fixed-size grid pages (36 cards, 6 per row)
pub fn grid_pages(entries: &[RankedColor]) -> Vec<&[RankedColor]> {
    entries.chunks(grid::PAGE_SIZE).collect()
}
