use std::{fmt, str::FromStr};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::Error;

macro_rules! games {
    {$($variant:ident = $code:literal => $name:literal),* $(,)?} => {
        /// A game on the network.
        ///
        /// Each game has the numeric type id the API uses and a database name.
        /// Stats objects are keyed by the database name, which for some games
        /// differs from the name players know it by. See the [game
        /// types](https://api.hypixel.net/#section/Introduction/GameTypes)
        /// section of the API documentation.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
        )]
        #[repr(u16)]
        pub enum Game {
            $($variant = $code,)*
        }

        impl Game {
            /// Every game, in type id order.
            pub const ALL: &'static [Game] = &[$(Game::$variant,)*];

            /// The uppercase database name.
            pub fn db_name(self) -> &'static str {
                match self {
                    $(Game::$variant => $name,)*
                }
            }
        }
    };
}

games! {
    MainLobby = 1 => "MAINLOBBY",
    Quake = 2 => "QUAKE",
    Walls = 3 => "WALLS",
    Paintball = 4 => "PAINTBALL",
    HungerGames = 5 => "HUNGERGAMES",
    TntGames = 6 => "TNTGAMES",
    VampireZ = 7 => "VAMPIREZ",
    Walls3 = 13 => "WALLS3",
    Arcade = 14 => "ARCADE",
    Arena = 17 => "ARENA",
    Uhc = 20 => "UHC",
    Mcgo = 21 => "MCGO",
    Battleground = 23 => "BATTLEGROUND",
    SuperSmash = 24 => "SUPERSMASH",
    Gingerbread = 25 => "GINGERBREAD",
    Housing = 26 => "HOUSING",
    SkyWars = 51 => "SKYWARS",
    TrueCombat = 52 => "TRUE_COMBAT",
    SpeedUhc = 54 => "SPEEDUHC",
    SkyClash = 55 => "SKYCLASH",
    Legacy = 56 => "LEGACY",
    Prototype = 57 => "PROTOTYPE",
    Bedwars = 58 => "BEDWARS",
    MurderMystery = 59 => "MURDERMYSTERY",
    BuildBattle = 60 => "BUILDBATTLE",
    Duels = 61 => "DUELS",
    SkyBlock = 63 => "SKYBLOCK",
    Pit = 64 => "PIT",
    Replay = 65 => "REPLAY",
    Smp = 67 => "SMP",
    WoolGames = 68 => "WOOLGAMES",
}

impl Game {
    /// The numeric type id.
    pub fn code(self) -> u16 {
        self.into()
    }

    /// Match a stats key against the known games. Keys are compared after
    /// uppercasing, so `"Bedwars"` finds [`Game::Bedwars`].
    pub fn from_key(key: &str) -> Option<Game> {
        let key = key.to_uppercase();
        Game::ALL.iter().copied().find(|g| g.db_name() == key)
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_key(s).ok_or_else(|| Error::UnknownGame(s.to_owned()))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.db_name())
    }
}
