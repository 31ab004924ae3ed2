use crate::interpreter::error::DiceInitializeError;
use crate::interpreter::roller::Roller;
use log::trace;
use std::fmt;
use std::num::NonZeroU32;

/// The most dice a single term may roll. Every face is kept for the roll
/// string, so the count bounds the memory one term can take.
pub const MAX_DICE: u32 = 10_000;

/// A group of identical dice that has been rolled, e.g. `3d6`.
///
/// The dice are rolled exactly once, when the value is created, and the
/// outcome never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dice {
    number: u32,
    amount: NonZeroU32,
    total: u64,
    die_rolls: Vec<u32>,
}

impl Dice {
    /// Parses `NdM` (or `dM`, meaning `1dM`) and rolls the dice.
    ///
    /// # Arguments
    ///
    /// * `notation`: The dice notation, the `d` may be in either case.
    /// * `roller`: Where the faces come from.
    ///
    /// returns: The rolled dice, or the reason the notation could not be understood.
    ///
    /// # Examples
    ///
    /// ```
    /// use dice_roller::interpreter::dice::Dice;
    /// # use dice_roller::interpreter::error::DiceInitializeError;
    ///
    /// # fn main() -> Result<(), DiceInitializeError> {
    /// let dice = Dice::roll("3d6", &mut rand::thread_rng())?;
    /// assert_eq!(dice.die_rolls().len(), 3);
    /// assert_eq!(dice.total(), dice.die_rolls().iter().map(|&roll| roll as u64).sum::<u64>());
    /// # Ok(()) }
    /// ```
    pub fn roll<R: Roller>(notation: &str, roller: &mut R) -> Result<Dice, DiceInitializeError> {
        let (number, amount) = parse_notation(notation)?;

        let die_rolls: Vec<u32> = (0..number).map(|_| roller.roll(amount)).collect();
        let total: u64 = die_rolls.iter().map(|&roll| u64::from(roll)).sum();

        let dice = Dice {
            number,
            amount,
            total,
            die_rolls,
        };
        trace!("{} rolled {:?} = {}", dice, dice.die_rolls, dice.total);

        Ok(dice)
    }

    /// How many dice were rolled.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// How many faces each die has.
    pub fn amount(&self) -> u32 {
        self.amount.get()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// The individual faces, in the order they were rolled.
    pub fn die_rolls(&self) -> &[u32] {
        &self.die_rolls
    }

    pub fn into_die_rolls(self) -> Vec<u32> {
        self.die_rolls
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.number, self.amount)
    }
}

fn parse_notation(notation: &str) -> Result<(u32, NonZeroU32), DiceInitializeError> {
    let (number, amount) = notation
        .split_once(|c: char| c.eq_ignore_ascii_case(&'d'))
        .ok_or_else(|| DiceInitializeError::NoDelimiter(notation.to_string()))?;

    let number: u32 = if number.is_empty() {
        1
    } else {
        number
            .parse()
            .map_err(|source| DiceInitializeError::InvalidNumber {
                notation: notation.to_string(),
                source,
            })?
    };
    if number > MAX_DICE {
        return Err(DiceInitializeError::TooManyDice {
            notation: notation.to_string(),
            max: MAX_DICE,
        });
    }
    let amount: u32 = amount
        .parse()
        .map_err(|source| DiceInitializeError::InvalidAmount {
            notation: notation.to_string(),
            source,
        })?;
    let amount =
        NonZeroU32::new(amount).ok_or_else(|| DiceInitializeError::NoFaces(notation.to_string()))?;

    Ok((number, amount))
}
