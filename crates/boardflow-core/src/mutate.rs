//! Shared mutation helpers
//!
//! Deterministic recipes and LLM-dispatched tools go through the same
//! helpers so cascades and containment behave identically on both paths.

use boardflow_store::{BatchOp, ObjectPatch};
use boardflow_types::{frame_interior, BoardObject, ObjectBody, ObjectId, ObjectKind, Rect};
use std::collections::HashSet;

/// Batch ops for deleting `targets` with the standard cascades:
/// children of deleted frames are unparented (not deleted), connectors
/// with an endpoint in `targets` are deleted.
pub(crate) fn cascade_delete(
    objects: &[BoardObject],
    targets: &HashSet<ObjectId>,
) -> Vec<BatchOp> {
    let mut ops: Vec<BatchOp> = Vec::new();
    for object in objects {
        if targets.contains(&object.id) {
            ops.push(BatchOp::Delete(object.id.clone()));
            continue;
        }
        if let ObjectBody::Connector { from_id, to_id, .. } = &object.body {
            let dangling = from_id.as_ref().is_some_and(|id| targets.contains(id))
                || to_id.as_ref().is_some_and(|id| targets.contains(id));
            if dangling {
                ops.push(BatchOp::Delete(object.id.clone()));
                continue;
            }
        }
        if object
            .parent_id
            .as_ref()
            .is_some_and(|p| targets.contains(p))
        {
            ops.push(BatchOp::Update(
                object.id.clone(),
                ObjectPatch::new().unparented(),
            ));
        }
    }
    ops
}

/// First frame (topmost by z-order) whose interior contains `bounds`
pub(crate) fn containing_frame(objects: &[BoardObject], bounds: &Rect) -> Option<ObjectId> {
    let mut frames: Vec<&BoardObject> = objects
        .iter()
        .filter(|o| o.kind() == ObjectKind::Frame)
        .collect();
    frames.sort_by_key(|f| std::cmp::Reverse(f.updated_at));
    frames
        .iter()
        .find(|f| {
            let borderless = matches!(&f.body, ObjectBody::Frame { borderless: true, .. });
            frame_interior(&f.bounds(), borderless).contains_rect(bounds)
        })
        .map(|f| f.id.clone())
}

/// Position that places a `width`x`height` child inside `interior`,
/// moving it as little as possible (repositioning-on-attach)
pub(crate) fn clamp_into(interior: &Rect, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let max_x = interior.right() - width;
    let max_y = interior.bottom() - height;
    // A child wider than the interior pins to the near edge.
    let cx = if max_x < interior.x {
        interior.x
    } else {
        x.clamp(interior.x, max_x)
    };
    let cy = if max_y < interior.y {
        interior.y
    } else {
        y.clamp(interior.y, max_y)
    };
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardflow_types::ObjectId;

    fn frame(id: &str, x: f64, y: f64, w: f64, h: f64) -> BoardObject {
        BoardObject::new(
            ObjectId::new(id),
            ObjectBody::Frame {
                title: String::new(),
                borderless: false,
                color: "#F5F5F5".to_string(),
            },
            "tester",
        )
        .with_position(x, y)
        .with_size(w, h)
    }

    fn sticky(id: &str) -> BoardObject {
        BoardObject::new(
            ObjectId::new(id),
            ObjectBody::Sticky {
                text: String::new(),
                color: "#FFEB3B".to_string(),
            },
            "tester",
        )
    }

    #[test]
    fn frame_delete_unparents_children_and_drops_connectors() {
        let f = frame("f1", 0.0, 0.0, 600.0, 400.0);
        let child = sticky("s1").with_parent(ObjectId::new("f1"));
        let outside = sticky("s2");
        let mut connector = sticky("c1");
        connector.body = ObjectBody::Connector {
            from_id: Some(ObjectId::new("f1")),
            to_id: Some(ObjectId::new("s2")),
            start_arrow: false,
            end_arrow: true,
            label: None,
            color: "#9E9E9E".to_string(),
        };

        let objects = vec![f, child, outside, connector];
        let targets: HashSet<ObjectId> = [ObjectId::new("f1")].into_iter().collect();
        let ops = cascade_delete(&objects, &targets);

        let deletes: Vec<&ObjectId> = ops
            .iter()
            .filter_map(|op| match op {
                BatchOp::Delete(id) => Some(id),
                _ => None,
            })
            .collect();
        let updates: Vec<&ObjectId> = ops
            .iter()
            .filter_map(|op| match op {
                BatchOp::Update(id, _) => Some(id),
                _ => None,
            })
            .collect();
        assert!(deletes.contains(&&ObjectId::new("f1")));
        assert!(deletes.contains(&&ObjectId::new("c1")));
        assert_eq!(updates, vec![&ObjectId::new("s1")]);
    }

    #[test]
    fn topmost_frame_wins_containment() {
        let mut older = frame("f_old", 0.0, 0.0, 600.0, 400.0);
        older.updated_at = 1;
        let mut newer = frame("f_new", 0.0, 0.0, 600.0, 400.0);
        newer.updated_at = 2;

        let objects = vec![older, newer];
        let hit = containing_frame(&objects, &Rect::new(100.0, 100.0, 50.0, 50.0));
        assert_eq!(hit, Some(ObjectId::new("f_new")));
    }

    #[test]
    fn clamp_moves_child_minimally() {
        let interior = Rect::new(10.0, 10.0, 300.0, 200.0);
        assert_eq!(clamp_into(&interior, 50.0, 50.0, 100.0, 100.0), (50.0, 50.0));
        assert_eq!(clamp_into(&interior, 0.0, 0.0, 100.0, 100.0), (10.0, 10.0));
        assert_eq!(
            clamp_into(&interior, 400.0, 400.0, 100.0, 100.0),
            (210.0, 110.0)
        );
        // Oversized child pins to the near corner.
        assert_eq!(clamp_into(&interior, 0.0, 0.0, 500.0, 500.0), (10.0, 10.0));
    }
}
