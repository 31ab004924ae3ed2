//! Evaluates tabletop dice expressions such as `2d4 + 3d5*5 + 5.0 + d4`.
//!
//! ```
//! use dice_roller::interpreter::roll;
//!
//! let roll = roll("2d6 + 3").unwrap();
//! println!("{}", roll); // e.g. "[ 4, 1 ] + 3 = 8"
//! ```

pub mod interpreter;
