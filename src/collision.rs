/// Collision resolution, run once per frame after every entity has moved.

use crate::entities::{Arrow, Balloon, Player};

#[derive(Clone, Debug, PartialEq)]
pub struct CollisionOutcome {
    pub balloons: Vec<Balloon>,
    pub arrows: Vec<Arrow>,
    /// Balloons destroyed by arrows this frame.
    pub popped: u32,
    /// The player touched at least one balloon; the game is over.
    pub player_hit: bool,
}

/// Player × balloons, then arrows × balloons.
///
/// Balloons touching the player are removed.  A player hit ends the frame
/// there: arrows are left as they are and nothing is popped.  Otherwise
/// arrows are visited in order:
/// each one removes every still-live balloon it overlaps and disappears
/// itself if it hit anything, so no overlapping pair survives the frame and
/// no balloon is counted twice.
pub fn resolve_collisions(
    player: &Player,
    balloons: Vec<Balloon>,
    arrows: Vec<Arrow>,
) -> CollisionOutcome {
    let before = balloons.len();
    let mut balloons: Vec<Balloon> = balloons
        .into_iter()
        .filter(|b| !player.rect.intersects(&b.rect))
        .collect();
    let player_hit = balloons.len() < before;
    if player_hit {
        return CollisionOutcome {
            balloons,
            arrows,
            popped: 0,
            player_hit,
        };
    }

    let mut popped = 0;
    let mut surviving_arrows = Vec::with_capacity(arrows.len());
    for arrow in arrows {
        let alive = balloons.len();
        balloons.retain(|b| !arrow.rect.intersects(&b.rect));
        let hits = alive - balloons.len();
        if hits == 0 {
            surviving_arrows.push(arrow);
        } else {
            popped += hits as u32;
        }
    }

    CollisionOutcome {
        balloons,
        arrows: surviving_arrows,
        popped,
        player_hit,
    }
}
