//! Three-way tree-map reconciliation
//!
//! Merging reconciles three flat tree maps: the merge base, ours (HEAD) and
//! theirs (the merged branch). Every path in the union of the three maps is
//! resolved independently by comparing its blob fingerprints; content never
//! needs to be read to decide the outcome.
//!
//! A side that left a path untouched yields to the side that changed it; a
//! path changed incompatibly on both sides (including delete-versus-modify
//! and both-sides-added-differently) is a conflict. Conflicted paths are
//! excluded from the merged tree map and materialized with textual markers
//! so the user resolves them through `add` + `commit`.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::{BTreeMap, BTreeSet};

const OURS_MARKER: &str = "<<<<<<< OURS\n";
const SIDE_SEPARATOR: &str = "=======\n";
const THEIRS_MARKER: &str = ">>>>>>> THEIRS\n";

/// A path both sides changed in incompatible ways
///
/// `ours`/`theirs` hold the side's blob fingerprint, `None` when that side
/// deleted the path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ConflictEntry {
    pub path: String,
    pub ours: Option<ObjectId>,
    pub theirs: Option<ObjectId>,
}

/// Result of reconciling three tree maps
///
/// Conflicted paths are omitted from `tree`; they are listed in `conflicts`
/// in path order.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct MergeOutcome {
    pub tree: BTreeMap<String, ObjectId>,
    pub conflicts: Vec<ConflictEntry>,
}

impl MergeOutcome {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Reconcile ours and theirs against their merge base
pub fn reconcile(
    base: &BTreeMap<String, ObjectId>,
    ours: &BTreeMap<String, ObjectId>,
    theirs: &BTreeMap<String, ObjectId>,
) -> MergeOutcome {
    let paths = base
        .keys()
        .chain(ours.keys())
        .chain(theirs.keys())
        .collect::<BTreeSet<_>>();

    let mut outcome = MergeOutcome::default();

    for path in paths {
        let resolution = resolve(base.get(path), ours.get(path), theirs.get(path));

        match resolution {
            Resolution::Keep(oid) => {
                outcome.tree.insert(path.clone(), oid.clone());
            }
            Resolution::Delete => {}
            Resolution::Conflict => {
                outcome.conflicts.push(ConflictEntry {
                    path: path.clone(),
                    ours: ours.get(path).cloned(),
                    theirs: theirs.get(path).cloned(),
                });
            }
        }
    }

    outcome
}

enum Resolution<'t> {
    Keep(&'t ObjectId),
    Delete,
    Conflict,
}

/// The three-way decision table for one path
///
/// `base`/`ours`/`theirs` are the blob fingerprints at the merge base, HEAD
/// and the merged branch; `None` means the path is absent there.
fn resolve<'t>(
    base: Option<&'t ObjectId>,
    ours: Option<&'t ObjectId>,
    theirs: Option<&'t ObjectId>,
) -> Resolution<'t> {
    match (base, ours, theirs) {
        // added on one side only
        (None, None, Some(added)) => Resolution::Keep(added),
        (None, Some(added), None) => Resolution::Keep(added),
        // added on both sides
        (None, Some(ours), Some(theirs)) if ours == theirs => Resolution::Keep(ours),
        (None, Some(_), Some(_)) => Resolution::Conflict,
        // deleted on both sides
        (Some(_), None, None) => Resolution::Delete,
        // present everywhere
        (Some(base), Some(ours), Some(theirs)) => {
            if ours == theirs {
                Resolution::Keep(ours)
            } else if base == ours {
                Resolution::Keep(theirs)
            } else if base == theirs {
                Resolution::Keep(ours)
            } else {
                Resolution::Conflict
            }
        }
        // deleted on our side
        (Some(base), None, Some(theirs)) => {
            if base == theirs {
                Resolution::Delete
            } else {
                Resolution::Conflict
            }
        }
        // deleted on their side
        (Some(base), Some(ours), None) => {
            if base == ours {
                Resolution::Delete
            } else {
                Resolution::Conflict
            }
        }
        (None, None, None) => unreachable!("path outside the union of the three trees"),
    }
}

/// Render the conflict-marked working-tree content for one path
///
/// A deleted side contributes an empty section. Each non-empty section is
/// newline-terminated so the markers always sit on their own lines.
pub fn render_conflict(ours: Option<&Bytes>, theirs: Option<&Bytes>) -> Bytes {
    let mut content = BytesMut::new();

    content.put_slice(OURS_MARKER.as_bytes());
    put_section(&mut content, ours);
    content.put_slice(SIDE_SEPARATOR.as_bytes());
    put_section(&mut content, theirs);
    content.put_slice(THEIRS_MARKER.as_bytes());

    content.freeze()
}

fn put_section(content: &mut BytesMut, side: Option<&Bytes>) {
    if let Some(bytes) = side
        && !bytes.is_empty()
    {
        content.put_slice(bytes);
        if !bytes.ends_with(b"\n") {
            content.put_u8(b'\n');
        }
    }
}
