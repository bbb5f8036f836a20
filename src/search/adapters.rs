//! Search entity adapters
//! One mapping table per entity type, plus the composition functions that
//! merge series/season overlays and dispatch ways-to-watch groups

use serde_json::{Map, Value};

use crate::adapters;
use crate::datamap::{to, Mapping};

/// Mapping for a single search suggestion
pub fn suggestion_mapping() -> Mapping {
    Mapping::new()
        // UUID of the suggested entity. Carries a 'srch:' prefix when the
        // content was not matched by the programme database and the UUID was
        // generated by search itself.
        .field("uuid", to("uuid"))
        // "series", "programme", "sport", "team", "competition", "person"
        // or "boxset"
        .field("uuidtype", to("uuidtype"))
        .field("t", to("title"))
        // "programme", "movie" or "movie boxset"
        .field("type", to("type").optional())
        .field("sy", to("synopsis").with(adapters::synopsis).optional())
}

/// Series overlay, merged in when the item carries a series UUID
pub fn series_mapping() -> Mapping {
    Mapping::new()
        .field("seriesuuid", to("seriesId"))
        .field("seriestitle", to("seriesTitle"))
}

/// Season overlay, merged in when the item carries a season UUID
pub fn season_mapping() -> Mapping {
    Mapping::new()
        .field("seasonuuid", to("seasonId"))
        .field("seasontitle", to("seasonTitle"))
        .field("seasonnumber", to("seasonNumber"))
        .field("episodenumber", to("episodeNumber"))
}

/// Base programme record of a compound search result
pub fn programme_mapping() -> Mapping {
    Mapping::new()
        .field("uuid", to("uuid"))
        .field("uuidtype", to("uuidtype"))
        .field("t", to("t"))
        .field("type", to("type"))
        .field("episodenumber", to("episodeNumber"))
        .field("waystowatch", to("watch").with(ways_to_watch_adapter))
        .field("sy", to("synopsis"))
        .field("reviewrating", to("rating").with(adapters::five_star_rating).optional())
        .field("r", to("certificate").with(adapters::certificate))
        .field("trailer", to("hasTrailer").bool())
}

/// Linear (broadcast) offer
pub fn linear_mapping() -> Mapping {
    Mapping::new()
        .field("st", to("startsAt").epoch())
        .field("end", to("endsAt").epoch())
        .field("channelname", to("channelName"))
        .field("sid", to("serviceId"))
        .field("eventid", to("eventId"))
        .field("d", to("duration").with(adapters::duration))
        .field("videotype", to("quality"))
        .field("is3D", to("is3D").bool())
        .field("s", to("hasSubtitles").bool())
        .field("ad", to("hasAudioDescription").bool())
        .field("at", to("audioType").bool())
        .field("hardofhearing", to("isSuitableForHardOfHearing").bool())
        .field("ippv", to("isIPPV").bool())
        .field("sy", to("synopsis").with(adapters::synopsis))
        .field("marketingmessage", to("marketingMessage").optional())
        .field("cgid", to("channelGroupId"))
        .field("cgname", to("channelGroupName"))
        .field("canl", to("canSeriesLink").bool())
        .field("c", to("channelNumber")) // Logical channel number
}

/// Subscription video-on-demand offer
pub fn svod_mapping() -> Mapping {
    Mapping::new()
        .field("added", to("dateAdded").epoch())
        .field("availendtime", to("dateExpires").epoch())
        .field("providerid", to("providerId"))
        .field("providername", to("providerName"))
        .field("programmeid", to("programmeId"))
        .field("pushedprogrammeid", to("pushedProgrammeId"))
        .field("downloadlink", to("downloadLink"))
        .field("d", to("duration").with(adapters::duration))
        .field("size", to("downloadSizeBytes").number())
        .field("sid", to("serviceId"))
        .field("channelname", to("channelName"))
        .field("broadcastime", to("broadCastTime"))
        .field("videotype", to("quality"))
        .field("hardofhearing", to("isSuitableForHardOfHearing").bool())
        .field("ippv", to("isIPPV").bool())
        .field("sy", to("synopsis").with(adapters::synopsis))
        .field("r", to("certificate").with(adapters::certificate))
        .field("marketingmessage", to("marketingMessage").optional())
        .field("cgid", to("channelGroupId"))
        .field("cgname", to("channelGroupName"))
}

/// Recognized ways-to-watch offer types. New upstream types fall into
/// `Ignored` and are dropped rather than breaking mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferType {
    Linear,
    Svod,
    Ignored,
}

impl OfferType {
    pub fn from_key(key: &str) -> Self {
        match key {
            "linear" => OfferType::Linear,
            "svod" => OfferType::Svod,
            // "store", "est", "ott" and anything unrecognized
            _ => OfferType::Ignored,
        }
    }
}

/// A compound search result before flattening: the programme record plus
/// the series/season overlays that apply to it
#[derive(Debug, Clone)]
struct CompoundResult {
    programme: Map<String, Value>,
    series: Option<Map<String, Value>>,
    season: Option<Map<String, Value>>,
}

impl CompoundResult {
    /// Flatten to one record. Overlays merge in programme, series, season
    /// order, so on key collision the season overlay wins (its
    /// `episodeNumber` overwrites the programme's).
    fn flatten(self) -> Value {
        let mut out = self.programme;
        for overlay in [self.series, self.season].into_iter().flatten() {
            out.extend(overlay);
        }
        Value::Object(out)
    }
}

fn has_key(item: &Value, key: &str) -> bool {
    match item.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Null) | None => false,
        Some(_) => true,
    }
}

/// Map suggestion results, attaching the caller's `userId` and `section`
/// to every element
pub fn suggestions_adapter(result_object: &Value, section: &str, user_id: &str) -> Vec<Value> {
    let results = match result_object.get("results").and_then(Value::as_array) {
        Some(results) => results,
        None => return Vec::new(),
    };
    results
        .iter()
        .map(|result| {
            let mut mapped = suggestion_mapping().run(result);
            mapped.insert("userId".to_string(), Value::String(user_id.to_string()));
            mapped.insert("section".to_string(), Value::String(section.to_string()));
            Value::Object(mapped)
        })
        .collect()
}

/// Map one raw search item to a single merged record
pub fn compound_result_adapter(item: &Value) -> Value {
    let result = CompoundResult {
        programme: programme_mapping().run(item),
        series: has_key(item, "seriesuuid").then(|| series_mapping().run(item)),
        season: has_key(item, "seasonuuid").then(|| season_mapping().run(item)),
    };
    result.flatten()
}

/// Map a ways-to-watch object into a list of per-offer-type lists.
/// Group order follows the input's key order; ignored offer types
/// contribute no entry at all.
pub fn ways_to_watch_adapter(waystowatch: &Value) -> Value {
    let mut groups = Vec::new();
    let object = match waystowatch.as_object() {
        Some(object) => object,
        None => return Value::Array(groups),
    };
    for (key, offers) in object {
        let mapping = match OfferType::from_key(key) {
            OfferType::Linear => linear_mapping(),
            OfferType::Svod => svod_mapping(),
            OfferType::Ignored => continue,
        };
        match offers.as_array() {
            Some(offers) if !offers.is_empty() => {
                groups.push(Value::Array(
                    offers
                        .iter()
                        .map(|offer| Value::Object(mapping.run(offer)))
                        .collect(),
                ));
            }
            // Empty groups contribute no entry, not an empty placeholder
            _ => {}
        }
    }
    Value::Array(groups)
}

/// Entry point: map every element of `programmes`.
/// A missing `programmes` key yields an empty list, not an error.
pub fn results_adapter(results: &Value) -> Vec<Value> {
    match results.get("programmes").and_then(Value::as_array) {
        Some(programmes) => programmes.iter().map(compound_result_adapter).collect(),
        None => Vec::new(),
    }
}
