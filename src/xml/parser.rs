//! XML reader producing the arena document
//!
//! This is a deliberately small reader for catalog files: elements,
//! attributes, character data and entity references are handled; comments,
//! processing instructions, DOCTYPE declarations and CDATA sections are
//! skipped. Only the text chunk before an element's first child is kept,
//! which is the only text the catalog operations ever look at.

use indexmap::IndexMap;

use crate::error::{CatalogError, CatalogErrorKind, Result, XmlError};
use crate::xml::cursor::Cursor;
use crate::xml::tree::{Document, Node, NodeId};

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    /// Create a new XML parser
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            nodes: Vec::new(),
        }
    }

    /// Parse an XML document into an arena tree
    pub fn parse(mut self) -> Result<Document> {
        self.cursor.skip_whitespace();
        let root = self.parse_element()?;
        self.cursor.skip_whitespace();

        // Comments and processing instructions may trail the root.
        while self.cursor.current() == Some(b'<')
            && matches!(self.cursor.peek(1), Some(b'!') | Some(b'?'))
        {
            self.cursor.advance();
            if self.cursor.current() == Some(b'?') {
                self.skip_processing_instruction()?;
            } else {
                self.skip_declaration_or_comment()?;
            }
            self.cursor.skip_whitespace();
        }

        if !self.cursor.is_eof() {
            return Err(self.error_here(XmlError::TrailingContent));
        }

        Ok(Document::new(self.nodes, root))
    }

    fn parse_element(&mut self) -> Result<NodeId> {
        self.expect_byte(b'<')?;

        if self.cursor.current() == Some(b'?') {
            self.skip_processing_instruction()?;
            self.cursor.skip_whitespace();
            return self.parse_element();
        }

        if self.cursor.current() == Some(b'!') {
            self.skip_declaration_or_comment()?;
            self.cursor.skip_whitespace();
            return self.parse_element();
        }

        if self.cursor.current() == Some(b'/') {
            return Err(self.error_here(XmlError::UnexpectedClosingTag));
        }

        let name = self.parse_name()?;
        let attributes = self.parse_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(self.alloc(Node {
                name,
                attributes,
                text: None,
                children: Vec::new(),
            }));
        }

        self.expect_byte(b'>')?;

        let mut text: Option<String> = None;
        let mut children = Vec::new();
        loop {
            match self.cursor.current() {
                Some(b'<') => match self.cursor.peek(1) {
                    Some(b'/') => {
                        self.cursor.advance_by(2);
                        let close_name = self.parse_name()?;
                        if close_name != name {
                            return Err(self.error_here(XmlError::MismatchedTag(close_name)));
                        }
                        self.cursor.skip_whitespace();
                        self.expect_byte(b'>')?;
                        break;
                    }
                    Some(b'!') => {
                        self.cursor.advance();
                        self.skip_declaration_or_comment()?;
                    }
                    Some(b'?') => {
                        self.cursor.advance();
                        self.skip_processing_instruction()?;
                    }
                    _ => {
                        let child = self.parse_element()?;
                        children.push(child);
                    }
                },
                Some(_) => {
                    let chunk = self.parse_text()?;
                    // ElementTree semantics: only the chunk before the
                    // first child element belongs to this node.
                    if text.is_none() && children.is_empty() {
                        text = chunk;
                    }
                }
                None => {
                    return Err(self.error_here(XmlError::UnexpectedEOF));
                }
            }
        }

        Ok(self.alloc(Node {
            name,
            attributes,
            text,
            children,
        }))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    fn parse_attributes(&mut self) -> Result<IndexMap<String, String>> {
        let mut attrs = IndexMap::new();

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => break,
                Some(_) => {}
                None => return Err(self.error_here(XmlError::UnexpectedEOF)),
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            let value = self.parse_attribute_value()?;

            if attrs.contains_key(&name) {
                return Err(self.error_here(XmlError::DuplicateAttribute(name)));
            }
            attrs.insert(name, value);
        }

        Ok(attrs)
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(b'"') => b'"',
            Some(b'\'') => b'\'',
            Some(c) => {
                return Err(self.error_here(XmlError::UnexpectedCharacter(char::from(c))))
            }
            None => return Err(self.error_here(XmlError::UnexpectedEOF)),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                let text = self.bytes_to_string(raw)?;
                return self.decode_entities(&text);
            }
            self.cursor.advance();
        }

        Err(self.error_here(XmlError::UnexpectedEOF))
    }

    fn parse_text(&mut self) -> Result<Option<String>> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        let text = self.bytes_to_string(raw)?;
        let text = self.decode_entities(&text)?;

        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(text))
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        let Some(first) = self.cursor.current() else {
            return Err(self.error_here(XmlError::UnexpectedEOF));
        };
        if !is_name_start(first) {
            return Err(self.error_here(XmlError::InvalidName));
        }

        self.cursor.advance();
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let raw = self.cursor.slice_from(start);
        self.bytes_to_string(raw)
    }

    fn skip_declaration_or_comment(&mut self) -> Result<()> {
        // cursor currently at '!'
        if self.cursor.peek(1) == Some(b'-') && self.cursor.peek(2) == Some(b'-') {
            self.cursor.advance_by(3);
            self.skip_until(b"-->")?;
            return Ok(());
        }

        if self.cursor.peek_bytes(8) == Some(b"![CDATA[") {
            self.cursor.advance_by(8);
            self.skip_until(b"]]>")?;
            return Ok(());
        }

        self.skip_until(b">")
    }

    fn skip_processing_instruction(&mut self) -> Result<()> {
        // cursor currently at '?'
        self.cursor.advance();
        self.skip_until(b"?>")
    }

    fn skip_until(&mut self, pattern: &[u8]) -> Result<()> {
        while self.cursor.current().is_some() {
            if self.cursor.peek_bytes(pattern.len()) == Some(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here(XmlError::UnexpectedEOF))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        match self.cursor.current() {
            Some(b) if b == expected => {
                self.cursor.advance();
                Ok(())
            }
            Some(b) => Err(self.error_here(XmlError::UnexpectedCharacter(char::from(b)))),
            None => Err(self.error_here(XmlError::UnexpectedEOF)),
        }
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(|s| s.to_string())
            .map_err(|_| self.error_here(XmlError::InvalidUtf8))
    }

    fn decode_entities(&self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '&' {
                result.push(ch);
                continue;
            }

            let mut entity = String::new();
            for next in chars.by_ref() {
                if next == ';' {
                    break;
                }
                entity.push(next);
            }

            let decoded = match entity.as_str() {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => decode_numeric_entity(&entity),
            };

            match decoded {
                Some(ch) => result.push(ch),
                None => {
                    return Err(self.error_here(XmlError::InvalidEntity(entity)));
                }
            }
        }

        Ok(result)
    }

    fn error_here(&self, kind: XmlError) -> CatalogError {
        let loc = self.cursor.location();
        CatalogError::new(CatalogErrorKind::Xml(kind)).with_location(loc.line, loc.column)
    }
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':')
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
