use std::fmt;
use std::io::Read;
use std::path::PathBuf;

use cubetwist_core::scramble::{self, ScrambleParams};
use cubetwist_core::{
    Cube, CubeKind, CubeState, GestureModifiers, StickerGrid, Twist, ValidationCode,
    validation_code,
};
use cubetwist_notation::{NodeList, twists_to_notation};
use eyre::{Context, Result, eyre};
use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::settings::{OutputFormat, Settings};

/// Command-line front end for the cubetwist puzzle engine
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Settings file to layer over the defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Output format, overriding the settings.
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,
    /// Log debug messages.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// List supported cube kinds.
    Kinds,
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Cube kind, such as `RubiksCube` or `4x4 Cube`.
        #[arg(short, long)]
        kind: Option<CubeKind>,
        /// Moves, such as `R U R' U'` or `[R, U]2`.
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Print a random scramble.
    Scramble {
        /// Cube kind, such as `RubiksCube` or `4x4 Cube`.
        #[arg(short, long)]
        kind: Option<CubeKind>,
        /// Number of twists.
        #[arg(short, long)]
        length: Option<usize>,
        /// Random seed. The same seed always gives the same scramble.
        #[arg(short, long)]
        seed: Option<String>,
    },
    /// Check whether a JSON sticker grid describes a solvable 3x3x3 cube.
    Validate {
        /// JSON file containing 6 lists of 9 markings, use '-' for stdin.
        #[arg(value_parser)]
        grid_file: clio::Input,
    },
    /// Print the twist for a swipe across a sticker.
    Swipe {
        /// Cube kind, such as `RubiksCube` or `4x4 Cube`.
        #[arg(short, long)]
        kind: Option<CubeKind>,
        /// Part ID.
        part: usize,
        /// Orientation of the sticker on the part.
        orientation: u8,
        /// Swipe direction from 0 to 3.
        direction: u8,
        /// Twist the other way.
        #[arg(long)]
        inverse: bool,
        /// Twist an adjacent layer too.
        #[arg(long)]
        double_layer: bool,
        /// Twist by 180 degrees.
        #[arg(long)]
        double_angle: bool,
    },
    /// Print the effective settings as YAML.
    Settings,
}

pub(crate) fn exec(subcommand: Subcommand, settings: &Settings) -> Result<()> {
    let format = settings.output_format;
    match subcommand {
        Subcommand::Kinds => write_output(format, &kinds()),

        Subcommand::Apply { kind, moves } => {
            let kind = kind.unwrap_or(settings.default_kind);
            write_output(format, &apply(kind, &moves.join(" "))?)
        }

        Subcommand::Scramble { kind, length, seed } => {
            let kind = kind.unwrap_or(settings.default_kind);
            let length = length.unwrap_or(settings.scramble_length);
            let params = match seed {
                Some(seed) => ScrambleParams { length, seed },
                None => ScrambleParams::new(length),
            };
            write_output(format, &scramble(kind, params)?)
        }

        Subcommand::Validate { mut grid_file } => {
            let mut buffer = String::new();
            grid_file
                .read_to_string(&mut buffer)
                .context("error reading sticker grid")?;
            let grid: StickerGrid =
                serde_json::from_str(&buffer).context("error deserializing sticker grid")?;
            write_output(format, &validate(&grid))
        }

        Subcommand::Swipe {
            kind,
            part,
            orientation,
            direction,
            inverse,
            double_layer,
            double_angle,
        } => {
            let kind = kind.unwrap_or(settings.default_kind);
            let modifiers = GestureModifiers {
                inverse,
                double_layer,
                double_angle,
            };
            write_output(format, &swipe(kind, part, orientation, direction, modifiers)?)
        }

        Subcommand::Settings => {
            print!("{}", settings.to_yaml()?);
            Ok(())
        }
    }
}

fn write_output<T: Serialize + fmt::Display>(format: OutputFormat, value: &T) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(std::io::stdout(), value)
                .context("error serializing data and writing to stdout")?;
            println!();
        }
    }
    Ok(())
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct KindInfo {
    id: &'static str,
    name: &'static str,
    layer_count: u8,
    alternative_names: &'static [&'static str],
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
struct KindList(Vec<KindInfo>);

impl fmt::Display for KindList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.0.iter().map(|k| {
            format!(
                "{:<20} {} layers  {} ({})",
                k.id,
                k.layer_count,
                k.name,
                k.alternative_names[1..].join(", "),
            )
        });
        write!(f, "{}", lines.format("\n"))
    }
}

fn kinds() -> KindList {
    KindList(
        CubeKind::iter()
            .map(|kind| KindInfo {
                id: kind.id(),
                name: kind.name(),
                layer_count: kind.layer_count(),
                alternative_names: kind.alternative_names(),
            })
            .collect(),
    )
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct ApplyReport {
    kind: CubeKind,
    notation: String,
    twists: Vec<Twist>,
    /// `None` if the kind has no sticker layout.
    stickers: Option<StickerGrid>,
    unsolved_parts: usize,
    order: u64,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.kind.name(), self.notation)?;
        if let Some(stickers) = &self.stickers {
            writeln!(f, "{}", stickers.to_normalized_string().trim_end())?;
        }
        writeln!(f, "unsolved parts: {}", self.unsolved_parts)?;
        write!(f, "order: {}", self.order)
    }
}

fn apply(kind: CubeKind, moves: &str) -> Result<ApplyReport> {
    let notation: NodeList = moves.parse()?;
    let twists = notation.to_twists(kind.layer_count())?;
    log::info!("Applying {} twists to {kind}", twists.len());

    let cube = Cube::new(kind);
    cube.apply_all(twists.iter().copied())?;

    let stickers = match cube.to_stickers() {
        Ok(grid) => Some(grid),
        Err(e) => {
            log::debug!("No stickers for {kind}: {e}");
            None
        }
    };
    Ok(ApplyReport {
        kind,
        notation: notation.to_string(),
        twists,
        stickers,
        unsolved_parts: cube.unsolved_parts().len(),
        order: cube.order(),
    })
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct ScrambleReport {
    kind: CubeKind,
    seed: String,
    notation: String,
    twists: Vec<Twist>,
}

impl fmt::Display for ScrambleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

fn scramble(kind: CubeKind, params: ScrambleParams) -> Result<ScrambleReport> {
    log::info!("Scrambling {kind} with seed {:?}", params.seed);
    let twists = scramble::generate(kind.layer_count(), &params);
    let notation = twists_to_notation(&twists, kind.layer_count())?;
    Ok(ScrambleReport {
        kind,
        seed: params.seed,
        notation: notation.to_string(),
        twists,
    })
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct ValidationReport {
    code: ValidationCode,
    value: u8,
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.value)
    }
}

fn validate(grid: &StickerGrid) -> ValidationReport {
    let code = validation_code(grid);
    ValidationReport {
        code,
        value: code as u8,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct SwipeReport {
    twist: Twist,
    notation: String,
}

impl fmt::Display for SwipeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Twist {
            axis,
            layer_mask,
            angle,
        } = self.twist;
        write!(f, "{axis} {layer_mask:#b} {angle}  {}", self.notation)
    }
}

fn swipe(
    kind: CubeKind,
    part: usize,
    orientation: u8,
    direction: u8,
    modifiers: GestureModifiers,
) -> Result<SwipeReport> {
    let state = CubeState::new(kind.variant());
    let twist = state
        .resolve_swipe(part, orientation, direction, modifiers)
        .map_err(|e| eyre!("cannot swipe part {part}: {e}"))?;
    let notation = twists_to_notation(&[twist], kind.layer_count())?;
    Ok(SwipeReport {
        twist,
        notation: notation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_args() {
        use clap::Parser;

        let args = Args::try_parse_from([
            "cubetwist", "apply", "--kind", "4x4 cube", "R", "U'", "--format", "json",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
        let Subcommand::Apply { kind, moves } = args.subcommand else {
            panic!("expected apply");
        };
        assert_eq!(kind, Some(CubeKind::Revenge));
        assert_eq!(moves, ["R", "U'"]);

        let err = Args::try_parse_from(["cubetwist", "apply", "--kind", "Megaminx", "R"])
            .expect_err("unknown kind");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        let err = Args::try_parse_from(["cubetwist", "apply"]).expect_err("no moves");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_kinds() {
        let kinds = kinds();
        assert_eq!(kinds.0.len(), 7);
        assert_eq!(kinds.0[1].id, "RubiksCube");
        assert_eq!(kinds.0[1].layer_count, 3);
        assert!(kinds.to_string().lines().count() == 7);
    }

    #[test]
    fn test_apply() {
        let report = apply(CubeKind::Rubik, "[R, U]").unwrap();
        assert_eq!(report.notation, "[R, U]");
        assert_eq!(report.twists.len(), 4);
        assert_eq!(report.unsolved_parts, 7);
        assert_eq!(report.order, 6);
        assert!(report.stickers.is_some());

        let report = apply(CubeKind::Revenge, "R U").unwrap();
        assert_eq!(report.stickers, None);
        assert!(report.to_string().ends_with(&format!("order: {}", report.order)));

        let report = apply(CubeKind::Pocket, "R4").unwrap();
        assert_eq!(report.unsolved_parts, 0);
        assert_eq!(report.order, 1);

        let err = apply(CubeKind::Rubik, "R Q").expect_err("bad notation");
        assert!(err.downcast_ref::<cubetwist_notation::ParseNotationError>().is_some());
        let err = apply(CubeKind::Pocket, "M").expect_err("no middle layer");
        assert!(matches!(
            err.downcast_ref::<cubetwist_notation::ResolveError>(),
            Some(cubetwist_notation::ResolveError::NoMiddleLayer { layer_count: 2, .. }),
        ));
    }

    #[test]
    fn test_scramble_is_deterministic() {
        let params = ScrambleParams {
            length: 20,
            seed: "cubetwist".to_owned(),
        };
        let a = scramble(CubeKind::Professor, params.clone()).unwrap();
        let b = scramble(CubeKind::Professor, params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.twists.len(), 20);

        let reparsed: NodeList = a.notation.parse().unwrap();
        let cube = Cube::new(CubeKind::Professor);
        cube.apply_all(reparsed.to_twists(5).unwrap()).unwrap();
        let expected = Cube::new(CubeKind::Professor);
        expected.apply_all(a.twists).unwrap();
        assert_eq!(cube.state(), expected.state());
    }

    #[test]
    fn test_validate() {
        let solved = Cube::new(CubeKind::Rubik).to_stickers().unwrap();
        assert_eq!(validate(&solved).code, ValidationCode::Valid);
        assert_eq!(validate(&solved).to_string(), "Valid (0)");

        let short = StickerGrid(vec![vec![0; 9]; 5]);
        assert_eq!(validate(&short).code, ValidationCode::InvalidFaceletCount);
        assert_eq!(validate(&short).value, 2);
    }

    #[test]
    fn test_swipe_matches_cube() {
        let report = swipe(CubeKind::Rubik, 0, 0, 0, GestureModifiers::default()).unwrap();
        let cube = Cube::new(CubeKind::Rubik);
        let twist = cube.swipe(0, 0, 0, GestureModifiers::default()).unwrap();
        assert_eq!(report.twist, twist);

        let inverse = GestureModifiers {
            inverse: true,
            ..Default::default()
        };
        let inverted = swipe(CubeKind::Rubik, 0, 0, 0, inverse).unwrap();
        assert_eq!(inverted.twist, twist.inverse());

        let err = swipe(CubeKind::Rubik, 1000, 0, 0, GestureModifiers::default())
            .expect_err("part out of range");
        assert!(err.to_string().starts_with("cannot swipe part 1000"));
    }
}
