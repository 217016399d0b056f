use std::io::{self, BufRead, Write};

use tracing::{debug, trace};

use crate::{
    record::{normalize, Actor, ArityError, Director, Genre, MovieLine},
    split::split_list,
    sql::Statement,
    Dialect, Record,
};

const MOVIES: &str = "movies";
const PEOPLE: &str = "people";
const CHARACTERS: &str = "characters";
const DIRECTORS: &str = "directors";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines: usize,
    pub statements: usize,
    pub diagnostics: usize,
}

/// Turns catalogue lines into insert statements on `out`, reporting
/// malformed lines and list items on `diagnostics`.
pub struct Converter<'d, D: ?Sized, W, E> {
    dialect: &'d D,
    out: W,
    diagnostics: E,
    stats: Stats,
}

impl<'d, D, W, E> Converter<'d, D, W, E>
where
    D: Dialect + ?Sized,
    W: Write,
    E: Write,
{
    pub fn new(dialect: &'d D, out: W, diagnostics: E) -> Self {
        Converter {
            dialect,
            out,
            diagnostics,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.diagnostics)
    }

    pub fn write_statement(&mut self, stmt: &Statement) -> io::Result<()> {
        stmt.write_to(&mut self.out)?;
        self.stats.statements += 1;
        Ok(())
    }

    /// Convert every line of `input`, one line at a time.
    pub fn convert(&mut self, mut input: impl BufRead) -> io::Result<()> {
        let mut line = String::new();
        while input.read_line(&mut line)? > 0 {
            self.stats.lines += 1;
            self.convert_line(&line)?;
            line.clear();
        }
        self.out.flush()
    }

    /// Emit the movie of `line`, then its actors, then its directors.
    pub fn convert_line(&mut self, line: &str) -> io::Result<()> {
        let line = line.trim_end();
        if line.is_empty() {
            debug!("skipping blank line {}", self.stats.lines);
            return Ok(());
        }
        let parsed = match MovieLine::parse(line) {
            Ok(parsed) => parsed,
            Err(e) => return self.diagnose(&e),
        };
        let movie_id = parsed.id();

        let mut genres = Vec::new();
        for item in split_list(parsed.genres) {
            match normalize::<Genre>(movie_id, &item) {
                Ok(genre) => genres.push(genre.name),
                Err(e) => self.diagnose(&e)?,
            }
        }
        let genre = if genres.is_empty() {
            String::new()
        } else {
            self.dialect.list_literal(&genres)
        };
        self.insert(MOVIES, &parsed.movie(genre))?;

        for item in split_list(parsed.actors) {
            match normalize::<Actor>(movie_id, &item) {
                Ok(actor) => {
                    self.insert(PEOPLE, &actor.person())?;
                    self.insert(CHARACTERS, &actor.character())?;
                }
                Err(e) => self.diagnose(&e)?,
            }
        }
        for item in split_list(parsed.directors) {
            match normalize::<Director>(movie_id, &item) {
                Ok(director) => {
                    self.insert(PEOPLE, &director.person())?;
                    self.insert(DIRECTORS, &director.direction())?;
                }
                Err(e) => self.diagnose(&e)?,
            }
        }
        trace!(movie_id, "converted line {}", self.stats.lines);
        Ok(())
    }

    fn insert(&mut self, table: &str, record: &dyn Record) -> io::Result<()> {
        self.dialect.insert(&mut self.out, table, record)?;
        self.stats.statements += 1;
        Ok(())
    }

    fn diagnose(&mut self, e: &ArityError) -> io::Result<()> {
        debug!(movie_id = %e.movie_id, role = %e.role, "skipping malformed {}", e.role);
        writeln!(self.diagnostics, "{}", e)?;
        self.stats.diagnostics += 1;
        Ok(())
    }
}

/// Convert all of `input`, preceded by `preamble` as obtained from
/// [`Dialect::preamble`].
pub fn run<D, R, W, E>(
    dialect: &D,
    preamble: Option<&Statement>,
    input: R,
    out: W,
    diagnostics: E,
) -> io::Result<Stats>
where
    D: Dialect + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut converter = Converter::new(dialect, out, diagnostics);
    if let Some(stmt) = preamble {
        converter.write_statement(stmt)?;
    }
    converter.convert(input)?;
    Ok(converter.stats())
}
