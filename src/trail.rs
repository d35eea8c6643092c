//! Bounded per-body position history for trailing-path rendering.

use std::collections::VecDeque;

use bevy::math::DVec3;

/// Largest trail length a configuration may ask for (points per body).
pub const MAX_TRAIL_CAPACITY: usize = 1 << 20;

/// Ring of the most recent positions of one body, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<DVec3>,
    capacity: usize,
}

impl TrailBuffer {
    /// Empty trail holding at most `capacity` points, clamped to
    /// [`MAX_TRAIL_CAPACITY`]. Storage grows as points arrive.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity: capacity.min(MAX_TRAIL_CAPACITY),
        }
    }

    /// Trail already full of origin points, the way a freshly started
    /// visualization draws its first frames.
    pub fn zero_filled(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_TRAIL_CAPACITY);
        Self {
            points: std::iter::repeat_n(DVec3::ZERO, capacity).collect(),
            capacity,
        }
    }

    /// Append a point, evicting the oldest once the trail is full.
    pub fn push(&mut self, point: DVec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recently recorded point.
    pub fn latest(&self) -> Option<DVec3> {
        self.points.back().copied()
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.points.iter().copied()
    }

    /// Points from oldest to newest, collected for a polyline.
    pub fn to_vec(&self) -> Vec<DVec3> {
        self.iter().collect()
    }
}

/// One trail per body, all with the same capacity.
pub fn trails_for(body_count: usize, capacity: usize, zero_fill: bool) -> Vec<TrailBuffer> {
    (0..body_count)
        .map(|_| {
            if zero_fill {
                TrailBuffer::zero_filled(capacity)
            } else {
                TrailBuffer::new(capacity)
            }
        })
        .collect()
}

/// Append one position to each body's trail, in body order.
pub fn record(trails: &mut [TrailBuffer], positions: &[DVec3]) {
    for (trail, &pos) in trails.iter_mut().zip(positions) {
        trail.push(pos);
    }
}
