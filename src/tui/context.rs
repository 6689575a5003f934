//! Context handed from a parent screen to the child it navigates to
//!
//! Properties are positional and tagged. A child reads them with
//! [`ScreenContext::prop`]; asking for the wrong shape is a programming
//! fault and surfaces as [`NavigationError::ContextMismatch`].

use std::cell::RefCell;
use std::rc::Rc;

use super::screens::ScreenId;
use crate::core::models::{Artist, Event, EventDetails, EventType, Venue};
use crate::error::{NavResult, NavigationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Normal,
    /// Produced by a selector; carries exactly one property, the chosen value
    SelectorResult,
}

/// One positional context property
#[derive(Debug, Clone)]
pub enum ContextProp {
    /// Artist owned by the parent; the child edits it in place
    ArtistSlot(Rc<RefCell<Artist>>),
    VenueSlot(Rc<RefCell<Venue>>),
    Artist(Artist),
    Venue(Venue),
    Artists(Vec<Artist>),
    Venues(Vec<Venue>),
    Event(Event),
    Events(Vec<Event>),
    EventDetails(EventDetails),
    EventDetailsList(Vec<EventDetails>),
    EventType(EventType),
}

impl ContextProp {
    pub fn describe(&self) -> &'static str {
        match self {
            ContextProp::ArtistSlot(_) => "artist slot",
            ContextProp::VenueSlot(_) => "venue slot",
            ContextProp::Artist(_) => "artist",
            ContextProp::Venue(_) => "venue",
            ContextProp::Artists(_) => "artist list",
            ContextProp::Venues(_) => "venue list",
            ContextProp::Event(_) => "event",
            ContextProp::Events(_) => "event list",
            ContextProp::EventDetails(_) => "event details",
            ContextProp::EventDetailsList(_) => "event details list",
            ContextProp::EventType(_) => "event type",
        }
    }
}

/// Typed access to a [`ContextProp`] variant
pub trait ContextValue: Sized {
    const NAME: &'static str;

    fn from_prop(prop: &ContextProp) -> Option<Self>;

    fn into_prop(self) -> ContextProp;
}

macro_rules! context_value {
    ($ty:ty, $variant:ident, $name:literal) => {
        impl ContextValue for $ty {
            const NAME: &'static str = $name;

            fn from_prop(prop: &ContextProp) -> Option<Self> {
                match prop {
                    ContextProp::$variant(value) => Some(value.clone()),
                    _ => None,
                }
            }

            fn into_prop(self) -> ContextProp {
                ContextProp::$variant(self)
            }
        }
    };
}

context_value!(Rc<RefCell<Artist>>, ArtistSlot, "artist slot");
context_value!(Rc<RefCell<Venue>>, VenueSlot, "venue slot");
context_value!(Artist, Artist, "artist");
context_value!(Venue, Venue, "venue");
context_value!(Vec<Artist>, Artists, "artist list");
context_value!(Vec<Venue>, Venues, "venue list");
context_value!(Event, Event, "event");
context_value!(Vec<Event>, Events, "event list");
context_value!(EventDetails, EventDetails, "event details");
context_value!(Vec<EventDetails>, EventDetailsList, "event details list");
context_value!(EventType, EventType, "event type");

#[derive(Debug, Clone)]
pub struct ScreenContext {
    return_screen: ScreenId,
    props: Vec<ContextProp>,
    kind: ContextKind,
}

impl ScreenContext {
    pub fn new(return_screen: ScreenId, props: Vec<ContextProp>) -> Self {
        Self {
            return_screen,
            props,
            kind: ContextKind::Normal,
        }
    }

    /// Context with no properties; what the loop passes when the parent supplied none
    pub fn returning_to(return_screen: ScreenId) -> Self {
        Self::new(return_screen, Vec::new())
    }

    pub fn selector_result(return_screen: ScreenId, chosen: ContextProp) -> Self {
        Self {
            return_screen,
            props: vec![chosen],
            kind: ContextKind::SelectorResult,
        }
    }

    pub fn return_screen(&self) -> ScreenId {
        self.return_screen
    }

    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    pub fn is_selector_result(&self) -> bool {
        self.kind == ContextKind::SelectorResult
    }

    pub fn props(&self) -> &[ContextProp] {
        &self.props
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Read the property at `index` as `T`
    pub fn prop<T: ContextValue>(&self, index: usize, screen: &str) -> NavResult<T> {
        let prop = self
            .props
            .get(index)
            .ok_or_else(|| NavigationError::MissingContext {
                screen: screen.to_string(),
                index,
            })?;
        T::from_prop(prop).ok_or_else(|| NavigationError::ContextMismatch {
            screen: screen.to_string(),
            expected: T::NAME,
            found: prop.describe().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::screens::ScreenRegistry;

    fn some_id() -> ScreenId {
        ScreenRegistry::new().reserve()
    }

    #[test]
    fn test_new_context_is_normal() {
        let ctx = ScreenContext::new(some_id(), vec![EventType::Past.into_prop()]);
        assert_eq!(ctx.kind(), ContextKind::Normal);
        assert_eq!(ctx.prop::<EventType>(0, "Editor").unwrap(), EventType::Past);
    }

    #[test]
    fn test_selector_result_carries_one_prop() {
        let ctx = ScreenContext::selector_result(some_id(), Artist::new("A", "pop").into_prop());
        assert!(ctx.is_selector_result());
        assert_eq!(ctx.props().len(), 1);
        assert_eq!(ctx.prop::<Artist>(0, "Editor").unwrap(), Artist::new("A", "pop"));
    }

    #[test]
    fn test_wrong_shape_is_a_mismatch() {
        let ctx = ScreenContext::new(some_id(), vec![EventType::Future.into_prop()]);
        match ctx.prop::<Vec<Event>>(0, "Viewer") {
            Err(NavigationError::ContextMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, "event list");
                assert_eq!(found, "event type");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_prop() {
        let ctx = ScreenContext::returning_to(some_id());
        assert!(ctx.is_empty());
        assert!(matches!(
            ctx.prop::<Artist>(0, "Editor"),
            Err(NavigationError::MissingContext { index: 0, .. })
        ));
    }

    #[test]
    fn test_slots_share_state() {
        let slot = Rc::new(RefCell::new(Artist::new("A", "pop")));
        let ctx = ScreenContext::new(some_id(), vec![slot.clone().into_prop()]);
        let received = ctx.prop::<Rc<RefCell<Artist>>>(0, "Artist Editor").unwrap();
        received.borrow_mut().name = "B".to_string();
        assert_eq!(slot.borrow().name, "B");
    }
}
