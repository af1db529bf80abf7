//! Character identities and their fixed visual descriptions.
//!
//! Each supported character maps to an immutable natural-language description
//! that anchors the image-generation prompt. Unrecognized characters are
//! unrepresentable; parsing from user input happens at the CLI boundary.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
    Chiikawa,
    Hachiware,
    Usagi,
    Tanjiro,
    Nezuko,
    Zenitsu,
    Inosuke,
}

impl Character {
    pub const ALL: [Character; 7] = [
        Character::Chiikawa,
        Character::Hachiware,
        Character::Usagi,
        Character::Tanjiro,
        Character::Nezuko,
        Character::Zenitsu,
        Character::Inosuke,
    ];

    /// Display name used in analysis prompts and CLI parsing.
    pub fn name(&self) -> &'static str {
        match self {
            Character::Chiikawa => "Chiikawa",
            Character::Hachiware => "Hachiware",
            Character::Usagi => "Usagi",
            Character::Tanjiro => "Tanjiro",
            Character::Nezuko => "Nezuko",
            Character::Zenitsu => "Zenitsu",
            Character::Inosuke => "Inosuke",
        }
    }

    /// Fixed visual description interpolated into the image prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Character::Chiikawa => {
                "Chiikawa (a small, white, round, cute creature with bear-like ears, blushing cheeks), kawaii vector art style"
            }
            Character::Hachiware => {
                "Hachiware (a small, white and blue cat-like creature with blue tips on ears), kawaii vector art style"
            }
            Character::Usagi => {
                "Usagi (a small, yellow rabbit-like creature with long ears, energetic expression), kawaii vector art style"
            }
            Character::Tanjiro => {
                "Tanjiro Kamado from Demon Slayer (cute chibi style, wearing green and black checkered haori, scar on forehead, kind eyes)"
            }
            Character::Nezuko => {
                "Nezuko Kamado from Demon Slayer (cute chibi style, pink kimono, bamboo muzzle, long black hair with orange tips)"
            }
            Character::Zenitsu => {
                "Zenitsu Agatsuma from Demon Slayer (cute chibi style, yellow hair, yellow haori with white triangles, scared or sleeping expression)"
            }
            Character::Inosuke => {
                "Inosuke Hashibira from Demon Slayer (cute chibi style, wearing a grey boar mask, shirtless, muscular but cute)"
            }
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Character {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        Character::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(input.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown character: '{}'", input))
    }
}
