//! Route following: resolving a route's current byte into a concrete
//! walk target.

use crate::data::doors::{self, DOOR_REVERSE};
use crate::data::routes::{
    LOCATIONS, ROUTEBYTE_END, ROUTEBYTE_LOCATION_BASE, ROUTEINDEX_REVERSE, ROUTEINDEX_WANDER,
    get_route,
};
use crate::game::context::Game;
use crate::math::{MapPos8, Pos8};
use crate::rand::random_nibble;

/// A character's position along a route: which route, and which byte.
///
/// A step of 255 sits at the implicit terminator before the first byte,
/// which is where reverse traversal ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Route {
    pub index: u8,
    pub step: u8,
}

impl Route {
    pub const fn new(index: u8, step: u8) -> Route {
        Route { index, step }
    }

    pub fn is_reversed(&self) -> bool {
        self.index & ROUTEINDEX_REVERSE != 0
    }

    pub fn base_index(&self) -> u8 {
        self.index & !ROUTEINDEX_REVERSE
    }
}

/// What a route byte resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Walk to this location.
    Location(Pos8),
    /// Walk to this door half, then pass through it.
    Door { index: u8, mappos: MapPos8 },
    /// The route is exhausted.
    RouteEnds,
}

impl Game {
    /// Resolve the route's current byte.
    pub(crate) fn get_target(&mut self, route: &Route) -> Target {
        if route.index == ROUTEINDEX_WANDER {
            // Wander: pick a random location within the block of eight
            // chosen by the step.
            let block = (route.step & !7) as usize;
            let offset = (random_nibble(&mut self.prng_index) & 7) as usize;
            let index = (block + offset).min(LOCATIONS.len() - 1);
            return Target::Location(LOCATIONS[index]);
        }

        let bytes = get_route(route.index);
        if route.step == 255 || route.step as usize >= bytes.len() {
            return Target::RouteEnds;
        }

        let byte = bytes[route.step as usize];
        if byte == ROUTEBYTE_END {
            return Target::RouteEnds;
        }

        if byte & 0x7F < ROUTEBYTE_LOCATION_BASE {
            // A door. The byte's own flag and the route's reverse flag
            // together select which half is approached.
            let mut door_index = byte & 0x7F;
            if (byte & 0x80 != 0) != route.is_reversed() {
                door_index |= DOOR_REVERSE;
            }
            let door = doors::get_door(door_index);
            return Target::Door { index: door_index, mappos: door.mappos };
        }

        let loc = (byte - ROUTEBYTE_LOCATION_BASE) as usize;
        debug_assert!(loc < LOCATIONS.len());
        match LOCATIONS.get(loc) {
            Some(&pos) => Target::Location(pos),
            None => Target::RouteEnds,
        }
    }

    /// Step the route one byte onwards in its traversal direction.
    pub(crate) fn advance_route(route: &mut Route) {
        if route.index == ROUTEINDEX_WANDER {
            // Stay within the block of eight.
            route.step = (route.step & !7) | (route.step.wrapping_add(1) & 7);
        } else if route.is_reversed() {
            route.step = route.step.wrapping_sub(1);
        } else {
            route.step = route.step.wrapping_add(1);
        }
    }

    /// Flip a route's traversal direction in place, stepping off the
    /// terminator it just reached.
    pub(crate) fn reverse_route(route: &mut Route) {
        route.index ^= ROUTEINDEX_REVERSE;
        if route.is_reversed() {
            route.step = route.step.wrapping_sub(1);
        } else {
            route.step = route.step.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::routes::ROUTEINDEX_HALT;
    use crate::test_common;

    #[test]
    fn halt_route_ends_immediately() {
        let mut game = test_common::game();
        let route = Route::new(ROUTEINDEX_HALT, 0);
        assert_eq!(game.get_target(&route), Target::RouteEnds);
    }

    #[test]
    fn location_bytes_resolve() {
        let mut game = test_common::game();
        // Route 4 starts with location byte 104 -> LOCATIONS[64].
        let route = Route::new(4, 0);
        match game.get_target(&route) {
            Target::Location(pos) => assert_eq!(pos, LOCATIONS[64]),
            other => panic!("expected location, got {other:?}"),
        }
    }

    #[test]
    fn door_bytes_resolve_and_respect_reversal() {
        let mut game = test_common::game();
        // Route 42 starts with door pair 29.
        let fwd = Route::new(42, 0);
        let Target::Door { index: fwd_ix, .. } = game.get_target(&fwd) else {
            panic!("expected door");
        };
        let rev = Route::new(42 | ROUTEINDEX_REVERSE, 0);
        let Target::Door { index: rev_ix, .. } = game.get_target(&rev) else {
            panic!("expected door");
        };
        assert_eq!(fwd_ix & 0x7F, 29);
        assert_eq!(rev_ix & 0x7F, 29);
        assert_ne!(fwd_ix & DOOR_REVERSE, rev_ix & DOOR_REVERSE);
    }

    #[test]
    fn reverse_traversal_ends_before_first_byte() {
        let mut game = test_common::game();
        let mut route = Route::new(5 | ROUTEINDEX_REVERSE, 0);
        Game::advance_route(&mut route);
        assert_eq!(route.step, 255);
        assert_eq!(game.get_target(&route), Target::RouteEnds);
    }

    #[test]
    fn wander_picks_within_block() {
        let mut game = test_common::game();
        for _ in 0..64 {
            let route = Route::new(ROUTEINDEX_WANDER, 24);
            match game.get_target(&route) {
                Target::Location(pos) => {
                    assert!(LOCATIONS[24..32].contains(&pos));
                }
                other => panic!("expected location, got {other:?}"),
            }
        }
    }

    #[test]
    fn wander_advance_stays_in_block() {
        let mut route = Route::new(ROUTEINDEX_WANDER, 31);
        Game::advance_route(&mut route);
        assert_eq!(route.step, 24);
    }
}
