use std::str::FromStr;

use chumsky::prelude::*;
use cubetwist_core::Face;

use crate::*;

/// Error produced while parsing move notation.
///
/// Multiple errors may be produced during the same parse.
pub type ParseError<'src> = Rich<'src, char, SimpleSpan>;
type ParseExtra<'src> = extra::Err<ParseError<'src>>;

/// Trait alias for parser.
pub(crate) trait NotationParser<'src, O>:
    Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}
impl<'src, O, T> NotationParser<'src, O> for T where
    T: Clone + Parser<'src, &'src str, O, ParseExtra<'src>>
{
}

pub(crate) fn node_list<'src>() -> impl NotationParser<'src, NodeList> {
    recursive(|node_list| {
        let binary_group = node_list
            .clone()
            .then(choice((
                just(',').to(BinaryGroupKind::Commutator),
                just(':').to(BinaryGroupKind::Conjugate),
            )))
            .then(node_list.clone())
            .delimited_by(just('['), just(']'))
            .map(|((a, kind), b)| RepeatableNode::BinaryGroup {
                kind,
                contents: [a, b],
            })
            .labelled("commutator or conjugate");

        let group = node_list
            .delimited_by(just('('), just(')'))
            .map(RepeatableNode::Group)
            .labelled("parenthetical group");

        let repeatable_node = choice((group, binary_group, move_().map(RepeatableNode::Move)))
            .then(multiplier())
            .map(|(inner, multiplier)| Node::RepeatedNode { inner, multiplier });

        let node = choice((just('.').to(Node::Pause), repeatable_node));

        node.separated_by(text::whitespace().at_least(1))
            .collect()
            .padded()
            .map(NodeList)
    })
}

fn move_<'src>() -> impl NotationParser<'src, Move> {
    layer_prefix()
        .or_not()
        .then(family())
        .try_map(|(layers, family), span| {
            let m = Move { layers, family };
            m.check().map_err(|msg| Rich::custom(span, msg))?;
            Ok(m)
        })
        .labelled("move")
}

fn layer_prefix<'src>() -> impl NotationParser<'src, LayerPrefix> {
    choice((
        uint()
            .then_ignore(just('-'))
            .then(uint())
            .map(|(lo, hi)| LayerPrefix::Range(lo, hi)),
        uint().map(LayerPrefix::Single),
    ))
}

fn family<'src>() -> impl NotationParser<'src, Family> {
    let face_or_wide = one_of("RUFLDB")
        .try_map(face_from_letter)
        .then(just('w').or_not())
        .map(|(face, w)| match w {
            Some(_) => Family::Wide {
                face,
                lowercase: false,
            },
            None => Family::Face(face),
        });

    let lowercase_wide = one_of("rufldb")
        .try_map(|c: char, span| face_from_letter(c.to_ascii_uppercase(), span))
        .map(|face| Family::Wide {
            face,
            lowercase: true,
        });

    let slice = choice((
        just('M').to(Slice::M),
        just('E').to(Slice::E),
        just('S').to(Slice::S),
    ))
    .map(Family::Slice);

    let rotation = choice((
        just('x').to(CubeRotation::X),
        just('y').to(CubeRotation::Y),
        just('z').to(CubeRotation::Z),
    ))
    .map(Family::Rotation);

    choice((face_or_wide, lowercase_wide, slice, rotation)).labelled("move family")
}

fn face_from_letter<'src>(c: char, span: SimpleSpan) -> Result<Face, ParseError<'src>> {
    Face::from_str(&c.to_string()).map_err(|_| Rich::custom(span, format!("unknown face {c}")))
}

fn multiplier<'src>() -> impl NotationParser<'src, Multiplier> {
    uint().or_not().then(just('\'').ignored().or_not()).try_map(
        |(i, negate): (Option<i32>, Option<()>), span| match negate {
            Some(()) => match i.unwrap_or(1).checked_neg() {
                Some(i) => Ok(Multiplier(i)),
                None => Err(Rich::custom(span, "integer overflow")),
            },
            None => Ok(Multiplier(i.unwrap_or(1))),
        },
    )
}

/// Unsigned integer parser
fn uint<'src, U: FromStr<Err: ToString>>() -> impl NotationParser<'src, U> {
    // allow leading zeros
    one_of('0'..='9')
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map_with(|s: &str, e| {
            s.parse()
                .map_err(|err: U::Err| Rich::custom(e.span(), err.to_string()))
        })
}
