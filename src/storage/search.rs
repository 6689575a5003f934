//! Fuzzy name search over saved and cached upcoming events

use std::cmp::Reverse;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::{SavedEventStore, Search, Shared, UpcomingEventStore};
use crate::core::models::{Artist, EventDetails, Venue};

pub struct FuzzySearch {
    saved: Shared<dyn SavedEventStore>,
    upcoming: Shared<dyn UpcomingEventStore>,
    matcher: SkimMatcherV2,
}

impl FuzzySearch {
    pub fn new(saved: Shared<dyn SavedEventStore>, upcoming: Shared<dyn UpcomingEventStore>) -> Self {
        Self {
            saved,
            upcoming,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Score every candidate against `pattern`, keep matches, best first
    fn rank<T, F>(&self, candidates: Vec<T>, pattern: &str, key: F, max_count: Option<usize>) -> Vec<T>
    where
        F: Fn(&T) -> String,
    {
        let pattern = pattern.trim();
        let mut scored: Vec<(i64, String, T)> = candidates
            .into_iter()
            .filter_map(|c| {
                let k = key(&c);
                self.matcher
                    .fuzzy_match(&k, pattern)
                    .map(|score| (score, k, c))
            })
            .collect();
        scored.sort_by(|a, b| (Reverse(a.0), &a.1).cmp(&(Reverse(b.0), &b.1)));
        let limit = max_count.unwrap_or(usize::MAX);
        scored.into_iter().take(limit).map(|(_, _, c)| c).collect()
    }

    fn known_artists(&self) -> Vec<Artist> {
        let mut artists: Vec<Artist> = Vec::new();
        let saved = self.saved.borrow().get_all_events();
        let upcoming = self.upcoming.borrow().all_cached_events();
        let events = saved.iter().chain(upcoming.iter().map(|d| &d.event));
        for event in events {
            for artist in std::iter::once(&event.main_act).chain(event.openers.iter()) {
                if !artists.contains(artist) {
                    artists.push(artist.clone());
                }
            }
        }
        artists
    }

    fn known_venues(&self) -> Vec<Venue> {
        let mut venues: Vec<Venue> = Vec::new();
        let saved = self.saved.borrow().get_all_events();
        let upcoming = self.upcoming.borrow().all_cached_events();
        for venue in saved
            .iter()
            .map(|e| &e.venue)
            .chain(upcoming.iter().map(|d| &d.event.venue))
        {
            if !venues.contains(venue) {
                venues.push(venue.clone());
            }
        }
        venues
    }
}

impl Search for FuzzySearch {
    fn fuzzy_artist_matches_by_name(&self, name: &str, max_count: Option<usize>) -> Vec<Artist> {
        self.rank(self.known_artists(), name, |a| a.name.clone(), max_count)
    }

    fn fuzzy_venue_matches_by_name(&self, name: &str, max_count: Option<usize>) -> Vec<Venue> {
        self.rank(self.known_venues(), name, |v| v.name.clone(), max_count)
    }

    fn fuzzy_event_details_matches_by_artist(
        &self,
        name: &str,
        city: &str,
        state: &str,
        max_count: Option<usize>,
    ) -> Vec<EventDetails> {
        let events = self.upcoming.borrow().get_upcoming_events(city, state);
        self.rank(events, name, |d| d.event.main_act.name.clone(), max_count)
    }

    fn fuzzy_event_details_matches_by_venue(
        &self,
        name: &str,
        city: &str,
        state: &str,
        max_count: Option<usize>,
    ) -> Vec<EventDetails> {
        let events = self.upcoming.borrow().get_upcoming_events(city, state);
        self.rank(events, name, |d| d.event.venue.name.clone(), max_count)
    }
}
