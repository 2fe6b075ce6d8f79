use std::fmt;

use image::{Rgba, RgbaImage};

use crate::{
    foundation::error::SpriteError,
    procgen::draw::{fill_ellipse, fill_rect},
};

pub const SPRITE_SIZE: u32 = 64;

const BODY_LIGHT: Rgba<u8> = Rgba([120, 140, 160, 255]);
const BODY_DARK: Rgba<u8> = Rgba([70, 85, 105, 255]);
const OUTLINE: Rgba<u8> = Rgba([20, 25, 35, 255]);
const ACCENT: Rgba<u8> = Rgba([60, 190, 230, 255]);
const CORE_DIM: Rgba<u8> = Rgba([30, 110, 140, 255]);
const CORE_BRIGHT: Rgba<u8> = Rgba([90, 210, 240, 255]);
const DAMAGE_TINT: Rgba<u8> = Rgba([180, 110, 110, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RobotMode {
    Idle,
    Walking,
    Attack1,
    Jumping,
    Hurting,
    Spawning,
    Dying,
}

impl RobotMode {
    pub const ALL: [RobotMode; 7] = [
        RobotMode::Idle,
        RobotMode::Walking,
        RobotMode::Attack1,
        RobotMode::Jumping,
        RobotMode::Hurting,
        RobotMode::Spawning,
        RobotMode::Dying,
    ];

    /// Mode name as it appears in asset filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            RobotMode::Idle => "idle",
            RobotMode::Walking => "walking",
            RobotMode::Attack1 => "attack-1-ing",
            RobotMode::Jumping => "jumping",
            RobotMode::Hurting => "hurting",
            RobotMode::Spawning => "spawning",
            RobotMode::Dying => "dying",
        }
    }

    /// Frames in one animation cycle of this mode.
    pub fn frame_count(self) -> u32 {
        match self {
            RobotMode::Idle | RobotMode::Walking => 8,
            RobotMode::Attack1 | RobotMode::Spawning | RobotMode::Dying => 6,
            RobotMode::Jumping | RobotMode::Hurting => 4,
        }
    }
}

impl fmt::Display for RobotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RobotMode {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RobotMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                SpriteError::validation(format!(
                    "unknown robot mode '{s}' (expected one of: idle, walking, attack-1-ing, \
                     jumping, hurting, spawning, dying)"
                ))
            })
    }
}

/// Limb offsets and accents for one frame. Per-mode animation is a table
/// lookup into the const arrays below; no state is carried between frames.
#[derive(Clone, Copy, Debug, Default)]
struct Pose {
    bob: i32,
    left_arm: i32,
    right_arm: i32,
    left_leg: i32,
    right_leg: i32,
    attack_extension: i32,
    core_glow: bool,
    damage_tint: bool,
}

const IDLE_BOB: [i32; 8] = [0, 1, 2, 1, 0, -1, -2, -1];
const IDLE_ARMS: [i32; 8] = [0, 1, 1, 0, 0, -1, -1, 0];

const WALK_STRIDE: [i32; 8] = [4, 2, 0, -2, -4, -2, 0, 2];
const WALK_BOB: [i32; 8] = [0, -1, -2, -1, 0, 1, 2, 1];

const ATTACK_EXT: [i32; 6] = [0, 3, 6, 9, 6, 3];
const ATTACK_ARM_LIFT: [i32; 6] = [0, -1, -3, -4, -2, -1];
const ATTACK_BOB: [i32; 6] = [-1, -2, -3, -1, 0, 0];

const JUMP_BOB: [i32; 4] = [0, -4, -7, -5];
const JUMP_LEG: [i32; 4] = [-1, -3, -4, -3];
const JUMP_ARM: [i32; 4] = [-1, -2, -3, -2];

const HURT_SWAY: [i32; 4] = [0, 1, -1, 2];

const SPAWN_BOB: [i32; 6] = [4, 2, 0, -1, -2, -1];
const SPAWN_ARMS: [i32; 6] = [3, 2, 1, 0, -1, -1];

const DIE_SLUMP: [i32; 6] = [0, 1, 3, 5, 7, 9];

fn pose(mode: RobotMode, idx: usize) -> Pose {
    match mode {
        RobotMode::Idle => Pose {
            bob: IDLE_BOB[idx],
            left_arm: IDLE_ARMS[idx],
            right_arm: -IDLE_ARMS[idx],
            ..Pose::default()
        },
        RobotMode::Walking => {
            let stride = WALK_STRIDE[idx];
            Pose {
                bob: WALK_BOB[idx],
                left_arm: -stride / 2,
                right_arm: stride / 2,
                left_leg: stride,
                right_leg: -stride,
                ..Pose::default()
            }
        }
        RobotMode::Attack1 => Pose {
            bob: ATTACK_BOB[idx],
            right_arm: ATTACK_ARM_LIFT[idx],
            attack_extension: ATTACK_EXT[idx],
            core_glow: true,
            ..Pose::default()
        },
        RobotMode::Jumping => Pose {
            bob: JUMP_BOB[idx],
            left_arm: JUMP_ARM[idx],
            right_arm: JUMP_ARM[idx],
            left_leg: JUMP_LEG[idx],
            right_leg: JUMP_LEG[idx],
            ..Pose::default()
        },
        RobotMode::Hurting => Pose {
            bob: HURT_SWAY[idx],
            left_arm: 2,
            right_arm: -2,
            left_leg: 1,
            right_leg: -1,
            damage_tint: true,
            ..Pose::default()
        },
        RobotMode::Spawning => Pose {
            bob: SPAWN_BOB[idx],
            left_arm: SPAWN_ARMS[idx],
            right_arm: SPAWN_ARMS[idx],
            core_glow: true,
            ..Pose::default()
        },
        RobotMode::Dying => Pose {
            bob: DIE_SLUMP[idx],
            left_arm: 3,
            right_arm: 3,
            left_leg: 2,
            right_leg: 2,
            damage_tint: true,
            ..Pose::default()
        },
    }
}

/// Draw one animation frame of the robot on a transparent 64x64 canvas.
/// The frame index wraps at the mode's cycle length.
pub fn robot_frame(mode: RobotMode, frame: u32) -> RgbaImage {
    let idx = (frame % mode.frame_count()) as usize;
    let mut img = RgbaImage::new(SPRITE_SIZE, SPRITE_SIZE);
    draw_robot(&mut img, pose(mode, idx));
    img
}

/// Asset filename for a frame, e.g. `robot_walking_03.png`. Load these back
/// with the pattern `robot_<mode>_%02d.png`.
pub fn output_name(mode: RobotMode, frame: u32) -> String {
    format!("robot_{}_{:02}.png", mode, frame)
}

fn draw_robot(img: &mut RgbaImage, p: Pose) {
    let body_fill = if p.damage_tint { DAMAGE_TINT } else { BODY_LIGHT };

    let torso_top = 24 + p.bob;
    let torso_bottom = 46 + p.bob;
    let torso_left = 24;
    let torso_right = 40;

    let head_height = 12;
    let head_top = torso_top - head_height - 3;
    let head_bottom = torso_top - 3;
    let head_left = 26;
    let head_right = 38;

    // Torso and head
    fill_rect(img, torso_left, torso_top, torso_right, torso_bottom, body_fill, Some(OUTLINE));
    fill_rect(img, head_left, head_top, head_right, head_bottom, body_fill, Some(OUTLINE));

    let pelvis_top = torso_bottom - 2;
    let pelvis_bottom = torso_bottom + 2;
    fill_rect(
        img,
        torso_left + 2,
        pelvis_top,
        torso_right - 2,
        pelvis_bottom,
        body_fill,
        Some(OUTLINE),
    );

    // Visor
    let eye_y = head_top + 5;
    fill_rect(img, head_left + 5, eye_y, head_right - 1, eye_y + 3, ACCENT, None);

    // Chest core
    let core_color = if p.core_glow { CORE_BRIGHT } else { CORE_DIM };
    let core_cx = (torso_left + torso_right) / 2;
    let core_cy = torso_top + 9;
    fill_ellipse(
        img,
        core_cx - 3,
        core_cy - 3,
        core_cx + 3,
        core_cy + 3,
        core_color,
        Some(OUTLINE),
    );

    let shoulder_y = torso_top + 5;
    let hip_y = torso_bottom;
    let leg_bottom_base = torso_bottom + 16;

    // Arms
    let left_arm_top = shoulder_y + p.left_arm;
    fill_rect(
        img,
        torso_left - 6,
        left_arm_top,
        torso_left - 1,
        left_arm_top + 14,
        BODY_DARK,
        Some(OUTLINE),
    );

    let right_arm_top = shoulder_y + p.right_arm;
    let right_arm_right = torso_right + 6;
    let right_arm_bottom = right_arm_top + 14;
    fill_rect(
        img,
        torso_right + 1,
        right_arm_top,
        right_arm_right,
        right_arm_bottom,
        BODY_DARK,
        Some(OUTLINE),
    );

    // Attack beam out of the right hand
    if p.attack_extension > 0 {
        let hand_y = right_arm_bottom;
        fill_rect(
            img,
            right_arm_right,
            hand_y - 1,
            right_arm_right + p.attack_extension,
            hand_y + 1,
            ACCENT,
            Some(OUTLINE),
        );
    }

    // Legs
    fill_rect(img, 27, hip_y, 31, leg_bottom_base + p.left_leg, BODY_DARK, Some(OUTLINE));
    fill_rect(img, 33, hip_y, 37, leg_bottom_base + p.right_leg, BODY_DARK, Some(OUTLINE));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_round_trip() {
        for mode in RobotMode::ALL {
            assert_eq!(mode.as_str().parse::<RobotMode>().unwrap(), mode);
        }
        assert!("sprinting".parse::<RobotMode>().is_err());
    }

    #[test]
    fn frame_index_wraps_at_cycle_length() {
        let a = robot_frame(RobotMode::Walking, 2);
        let b = robot_frame(RobotMode::Walking, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn frames_within_a_cycle_differ() {
        let a = robot_frame(RobotMode::Walking, 0);
        let b = robot_frame(RobotMode::Walking, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn canvas_edges_stay_transparent() {
        // The robot never reaches the left/right canvas edges.
        for mode in RobotMode::ALL {
            for frame in 0..mode.frame_count() {
                let img = robot_frame(mode, frame);
                for y in 0..SPRITE_SIZE {
                    assert_eq!(img.get_pixel(0, y)[3], 0);
                    assert_eq!(img.get_pixel(SPRITE_SIZE - 1, y)[3], 0);
                }
            }
        }
    }

    #[test]
    fn attack_frames_glow_and_extend() {
        let calm = robot_frame(RobotMode::Idle, 0);
        let strike = robot_frame(RobotMode::Attack1, 3);
        // Peak attack frame paints accent pixels to the right of the arm.
        let accent = ACCENT;
        let strike_accents = strike.pixels().filter(|p| **p == accent).count();
        let calm_accents = calm.pixels().filter(|p| **p == accent).count();
        assert!(strike_accents > calm_accents);
    }

    #[test]
    fn output_name_is_zero_padded() {
        assert_eq!(output_name(RobotMode::Walking, 3), "robot_walking_03.png");
        assert_eq!(output_name(RobotMode::Attack1, 12), "robot_attack-1-ing_12.png");
    }
}
