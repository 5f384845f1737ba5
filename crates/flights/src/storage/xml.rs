//! XML codec.
//!
//! ```xml
//! <?xml version='1.0' encoding='utf-8'?>
//! <flights><flight><destination>Paris</destination><departure_date>20240601</departure_date><aircraft_type>A320</aircraft_type></flight></flights>
//! ```

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::flight::Flight;

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";
const ROOT_ELEMENT: &str = "flights";
const FLIGHT_ELEMENT: &str = "flight";

#[derive(Serialize)]
struct FlightsRef<'a> {
    #[serde(rename = "flight")]
    flights: &'a [Flight],
}

/// Serialize flights as a `<flights>` document with an XML declaration.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(flights: &[Flight]) -> Result<Vec<u8>> {
    let body = quick_xml::se::to_string_with_root(ROOT_ELEMENT, &FlightsRef { flights })?;
    let mut xml = String::with_capacity(XML_DECLARATION.len() + body.len());
    xml.push_str(XML_DECLARATION);
    xml.push_str(&body);
    Ok(xml.into_bytes())
}

/// Parse a `<flights>` document.
///
/// Field text is kept exactly as written, surrounding whitespace included.
///
/// # Errors
///
/// Input that is not well-formed XML becomes [`Error::XmlParse`]. A document
/// with the wrong root, an unexpected element, a missing field or a
/// non-integer date becomes [`Error::Structure`].
pub fn decode(bytes: &[u8], path: &Path) -> Result<Vec<Flight>> {
    FlightsParser::new(bytes, path).document()
}

/// Pull parser over the `<flights>` layout.
struct FlightsParser<'a> {
    reader: Reader<&'a [u8]>,
    path: &'a Path,
}

impl<'a> FlightsParser<'a> {
    fn new(bytes: &'a [u8], path: &'a Path) -> Self {
        let mut reader = Reader::from_reader(bytes);
        reader.config_mut().trim_text(false);
        Self { reader, path }
    }

    /// Next event that carries content; comments, declarations, processing
    /// instructions and doctypes are skipped.
    fn next_event(&mut self) -> Result<Event<'a>> {
        loop {
            let event = self
                .reader
                .read_event()
                .map_err(|err| Error::xml_parse(self.path, err.to_string()))?;
            match event {
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
                event => return Ok(event),
            }
        }
    }

    fn document(&mut self) -> Result<Vec<Flight>> {
        loop {
            match self.next_event()? {
                Event::Start(start) => {
                    self.expect_root(&start)?;
                    let flights = self.flights()?;
                    self.trailing()?;
                    return Ok(flights);
                }
                Event::Empty(start) => {
                    self.expect_root(&start)?;
                    self.trailing()?;
                    return Ok(Vec::new());
                }
                Event::Text(text) if is_blank(&text) => {}
                Event::Eof => return Err(self.syntax("missing root element")),
                _ => return Err(self.syntax("content before the root element")),
            }
        }
    }

    fn expect_root(&self, start: &BytesStart<'_>) -> Result<()> {
        let name = element_name(start);
        if name == ROOT_ELEMENT {
            Ok(())
        } else {
            Err(self.structure(format!(
                "expected root element <{ROOT_ELEMENT}>, found <{name}>"
            )))
        }
    }

    /// Only whitespace may follow the root element.
    fn trailing(&mut self) -> Result<()> {
        loop {
            match self.next_event()? {
                Event::Eof => return Ok(()),
                Event::Text(text) if is_blank(&text) => {}
                _ => return Err(self.syntax("content after the root element")),
            }
        }
    }

    /// Children of `<flights>`, up to its end tag.
    fn flights(&mut self) -> Result<Vec<Flight>> {
        let mut flights = Vec::new();
        loop {
            match self.next_event()? {
                Event::Start(start) if element_name(&start) == FLIGHT_ELEMENT => {
                    flights.push(self.flight()?);
                }
                Event::Empty(start) if element_name(&start) == FLIGHT_ELEMENT => {
                    flights.push(self.build(FlightFields::default())?);
                }
                Event::Start(start) | Event::Empty(start) => {
                    return Err(self.structure(format!(
                        "unexpected element <{}> in <{ROOT_ELEMENT}>",
                        element_name(&start)
                    )));
                }
                Event::Text(text) if is_blank(&text) => {}
                Event::End(_) => return Ok(flights),
                Event::Eof => return Err(self.unclosed(ROOT_ELEMENT)),
                _ => {
                    return Err(self.structure(format!("unexpected text in <{ROOT_ELEMENT}>")));
                }
            }
        }
    }

    /// Children of one `<flight>`, up to its end tag.
    fn flight(&mut self) -> Result<Flight> {
        let mut fields = FlightFields::default();
        loop {
            let (name, value) = match self.next_event()? {
                Event::Start(start) => {
                    let name = element_name(&start);
                    let value = self.text_content(&name)?;
                    (name, value)
                }
                Event::Empty(start) => (element_name(&start), String::new()),
                Event::Text(text) if is_blank(&text) => continue,
                Event::End(_) => return self.build(fields),
                Event::Eof => return Err(self.unclosed(FLIGHT_ELEMENT)),
                _ => {
                    return Err(self.structure(format!("unexpected text in <{FLIGHT_ELEMENT}>")));
                }
            };

            let slot = match name.as_str() {
                "destination" => &mut fields.destination,
                "departure_date" => &mut fields.departure_date,
                "aircraft_type" => &mut fields.aircraft_type,
                _ => {
                    return Err(self.structure(format!(
                        "unexpected element <{name}> in <{FLIGHT_ELEMENT}>"
                    )));
                }
            };
            if slot.replace(value).is_some() {
                return Err(self.structure(format!("duplicate field `{name}`")));
            }
        }
    }

    /// Unescaped text of a field element, up to its end tag.
    fn text_content(&mut self, name: &str) -> Result<String> {
        let mut value = String::new();
        loop {
            match self.next_event()? {
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|err| Error::xml_parse(self.path, err.to_string()))?;
                    value.push_str(&text);
                }
                Event::CData(cdata) => {
                    let text = std::str::from_utf8(&cdata)
                        .map_err(|err| Error::xml_parse(self.path, err.to_string()))?;
                    value.push_str(text);
                }
                Event::End(_) => return Ok(value),
                Event::Eof => return Err(self.unclosed(name)),
                _ => {
                    return Err(self.structure(format!("unexpected element inside <{name}>")));
                }
            }
        }
    }

    fn build(&self, fields: FlightFields) -> Result<Flight> {
        let destination = fields.destination.ok_or_else(|| self.missing("destination"))?;
        let raw_date = fields
            .departure_date
            .ok_or_else(|| self.missing("departure_date"))?;
        let aircraft_type = fields
            .aircraft_type
            .ok_or_else(|| self.missing("aircraft_type"))?;

        let departure_date = raw_date.trim().parse::<i64>().map_err(|_| {
            self.structure(format!(
                "invalid departure_date `{raw_date}`, expected an integer"
            ))
        })?;

        Ok(Flight::new(destination, departure_date, aircraft_type))
    }

    fn syntax(&self, message: &str) -> Error {
        Error::xml_parse(self.path, message)
    }

    fn unclosed(&self, name: &str) -> Error {
        Error::xml_parse(self.path, format!("unexpected end of input inside <{name}>"))
    }

    fn structure(&self, message: String) -> Error {
        Error::structure(self.path, message)
    }

    fn missing(&self, field: &str) -> Error {
        Error::structure(self.path, format!("missing field `{field}`"))
    }
}

/// Field values collected for one `<flight>` before validation.
#[derive(Default)]
struct FlightFields {
    destination: Option<String>,
    departure_date: Option<String>,
    aircraft_type: Option<String>,
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
