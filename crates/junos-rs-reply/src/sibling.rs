// crates/junos-rs-reply/src/sibling.rs

//! Streaming decoder for replies whose records are related by document order.
//!
//! Some replies do not nest dependent records inside their owner. The MACsec
//! connection reply, for example, lists each interface's common attributes
//! followed by its outbound and inbound secure channels as *siblings*:
//!
//! ```text
//! (Primary First? Second?)*
//! ```
//!
//! The decoder walks the children of the fragment as a flat stream of
//! [`SiblingEvent`]s and folds them into [`Group`]s, attaching every
//! attachment record to the most recent primary record.

use crate::error::ReplyError;
use crate::logging::{ReplyContext, my_debug, my_trace, my_warn};
use crate::xml::{self, Children, Subtree};
use alloc::vec::Vec;
use core::marker::PhantomData;
use serde::de::DeserializeOwned;

/// Describes one sibling grammar: which element names start a primary record
/// and which ones carry its two kinds of attachment.
pub trait SiblingGrammar {
    type Primary: DeserializeOwned;
    type First: DeserializeOwned;
    type Second: DeserializeOwned;

    const PRIMARY: &'static str;
    const FIRST: &'static str;
    const SECOND: &'static str;
}

/// A primary record with its attachment slots, filled or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group<P, A, B> {
    pub primary: P,
    pub first: Option<A>,
    pub second: Option<B>,
}

impl<P, A, B> Group<P, A, B> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            first: None,
            second: None,
        }
    }
}

/// The group type produced for grammar `G`.
pub type GroupOf<G> = Group<
    <G as SiblingGrammar>::Primary,
    <G as SiblingGrammar>::First,
    <G as SiblingGrammar>::Second,
>;

/// One child element of the fragment, tagged by its role in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingEvent<'a> {
    Primary(Subtree<'a>),
    First(Subtree<'a>),
    Second(Subtree<'a>),
    /// Anything else at this level. Skipped by the fold.
    Unrecognized(Subtree<'a>),
}

/// Iterator adapter that tags the children of a fragment for grammar `G`.
pub struct SiblingEvents<'a, G> {
    children: Children<'a>,
    _grammar: PhantomData<fn() -> G>,
}

impl<'a, G: SiblingGrammar> Iterator for SiblingEvents<'a, G> {
    type Item = Result<SiblingEvent<'a>, ReplyError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.children.next().map(|child| child.map(classify::<G>))
    }
}

fn classify<G: SiblingGrammar>(child: Subtree<'_>) -> SiblingEvent<'_> {
    let name = child.local_name();
    if name == G::PRIMARY {
        SiblingEvent::Primary(child)
    } else if name == G::FIRST {
        SiblingEvent::First(child)
    } else if name == G::SECOND {
        SiblingEvent::Second(child)
    } else {
        SiblingEvent::Unrecognized(child)
    }
}

/// Streams the direct children of `fragment` as grammar events.
pub fn sibling_events<G: SiblingGrammar>(fragment: Subtree<'_>) -> SiblingEvents<'_, G> {
    SiblingEvents {
        children: xml::children(fragment),
        _grammar: PhantomData,
    }
}

/// Folds an event stream into groups.
///
/// Fails on the first undecodable subtree or on an attachment seen before any
/// primary record; no partial result is returned in either case.
pub fn fold_groups<'a, G, I>(events: I) -> Result<Vec<GroupOf<G>>, ReplyError>
where
    G: SiblingGrammar,
    I: IntoIterator<Item = Result<SiblingEvent<'a>, ReplyError>>,
{
    let ctx = ReplyContext::new(G::PRIMARY);

    let init: Vec<GroupOf<G>> = Vec::new();
    events.into_iter().try_fold(init, |mut groups, event| -> Result<_, ReplyError> {
        match event? {
            SiblingEvent::Primary(subtree) => {
                let primary =
                    xml::decode_subtree(subtree.as_str(), G::PRIMARY, subtree.position())?;
                groups.push(Group::new(primary));
            }
            SiblingEvent::First(subtree) => {
                let record = xml::decode_subtree(subtree.as_str(), G::FIRST, subtree.position())?;
                let group = current_group::<G>(&mut groups, G::FIRST, subtree)?;
                if group.first.replace(record).is_some() {
                    my_warn!(
                        ctx,
                        "<{}> at position {} replaced an earlier attachment",
                        G::FIRST,
                        subtree.position()
                    );
                }
            }
            SiblingEvent::Second(subtree) => {
                let record = xml::decode_subtree(subtree.as_str(), G::SECOND, subtree.position())?;
                let group = current_group::<G>(&mut groups, G::SECOND, subtree)?;
                if group.second.replace(record).is_some() {
                    my_warn!(
                        ctx,
                        "<{}> at position {} replaced an earlier attachment",
                        G::SECOND,
                        subtree.position()
                    );
                }
            }
            SiblingEvent::Unrecognized(subtree) => {
                my_trace!(
                    ctx,
                    "skipping <{}> at position {}",
                    subtree.name(),
                    subtree.position()
                );
            }
        }
        Ok(groups)
    })
}

/// The group an attachment belongs to: the one opened by the most recent
/// primary record.
fn current_group<'g, G: SiblingGrammar>(
    groups: &'g mut [GroupOf<G>],
    element: &'static str,
    subtree: Subtree<'_>,
) -> Result<&'g mut GroupOf<G>, ReplyError> {
    groups.last_mut().ok_or(ReplyError::OutOfOrderAttachment {
        element,
        position: subtree.position(),
    })
}

/// Decodes one fragment (e.g. a `<macsec-connection-information>` element)
/// into its groups.
pub fn decode_groups<G: SiblingGrammar>(fragment: &str) -> Result<Vec<GroupOf<G>>, ReplyError> {
    let root = xml::root(fragment)?;
    let groups = fold_groups::<G, _>(sibling_events::<G>(root))?;
    my_debug!(
        ReplyContext::new(G::PRIMARY),
        "decoded {} group(s) from <{}>",
        groups.len(),
        root.name()
    );
    Ok(groups)
}
