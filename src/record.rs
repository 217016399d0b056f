use std::fmt;

use crate::{
    split::{parse_line, Item},
    Record,
};

/// Number of fields in a catalogue line: the movie columns followed by the
/// genre, director and actor lists.
pub const LINE_ARITY: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Movie,
    Genre,
    Actor,
    Director,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Role::Movie => "movie",
            Role::Genre => "genre",
            Role::Actor => "actor",
            Role::Director => "director",
        })
    }
}

/// A line or list item with the wrong number of values.
///
/// Displays as a complete diagnostic line (without the newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityError {
    pub movie_id: String,
    pub role: Role,
    pub expected: usize,
    pub found: usize,
    /// Text of the offending line or list item alone, not of the whole list field.
    pub raw: String,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}::{}] expected {} fields, found {} in \"{}\"",
            self.movie_id, self.role, self.expected, self.found, self.raw
        )
    }
}

impl std::error::Error for ArityError {}

/// A record built from one list item of a movie line.
pub trait SubRecord<'a>: Sized {
    const ROLE: Role;
    /// Number of values expected in the item.
    const ARITY: usize;

    /// Build the record; `values` has exactly `ARITY` elements.
    fn from_values(movie_id: &'a str, values: &[&'a str]) -> Self;
}

pub fn normalize<'a, T: SubRecord<'a>>(
    movie_id: &'a str,
    item: &Item<'a>,
) -> Result<T, ArityError> {
    if item.values.len() != T::ARITY {
        return Err(ArityError {
            movie_id: movie_id.to_owned(),
            role: T::ROLE,
            expected: T::ARITY,
            found: item.values.len(),
            raw: item.raw.to_owned(),
        });
    }
    Ok(T::from_values(movie_id, &item.values))
}

/// The fields of one catalogue line, with the list fields still unsplit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieLine<'a> {
    columns: [&'a str; 12],
    pub genres: &'a str,
    pub directors: &'a str,
    pub actors: &'a str,
}

impl<'a> MovieLine<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ArityError> {
        let fields = parse_line(line);
        match *fields.as_slice() {
            [
                id,
                title,
                original_title,
                release_date,
                status,
                vote_average,
                vote_count,
                runtime,
                certification,
                poster_path,
                budget,
                tag_line,
                genres,
                directors,
                actors,
            ] => Ok(MovieLine {
                columns: [
                    id,
                    title,
                    original_title,
                    release_date,
                    status,
                    vote_average,
                    vote_count,
                    runtime,
                    certification,
                    poster_path,
                    budget,
                    tag_line,
                ],
                genres,
                directors,
                actors,
            }),
            _ => Err(ArityError {
                movie_id: fields[0].to_owned(),
                role: Role::Movie,
                expected: LINE_ARITY,
                found: fields.len(),
                raw: line.to_owned(),
            }),
        }
    }

    pub fn id(&self) -> &'a str {
        self.columns[0]
    }

    /// The movie record, with `genre` as its pre-rendered genre column.
    pub fn movie(&self, genre: String) -> Movie<'a> {
        let [
            id,
            title,
            original_title,
            release_date,
            status,
            vote_average,
            vote_count,
            runtime,
            certification,
            poster_path,
            budget,
            tag_line,
        ] = self.columns;
        Movie {
            id,
            title,
            original_title,
            release_date,
            status,
            vote_average,
            vote_count,
            runtime,
            certification,
            poster_path,
            budget,
            tag_line,
            genre,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub original_title: &'a str,
    pub release_date: &'a str,
    pub status: &'a str,
    pub vote_average: &'a str,
    pub vote_count: &'a str,
    pub runtime: &'a str,
    pub certification: &'a str,
    pub poster_path: &'a str,
    pub budget: &'a str,
    pub tag_line: &'a str,
    pub genre: String,
}

impl<'a> Record for Movie<'a> {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "id",
            "title",
            "original_title",
            "release_date",
            "status",
            "vote_average",
            "vote_count",
            "runtime",
            "certification",
            "poster_path",
            "budget",
            "tag_line",
            "genre",
        ]
    }

    fn values(&self) -> Vec<&str> {
        vec![
            self.id,
            self.title,
            self.original_title,
            self.release_date,
            self.status,
            self.vote_average,
            self.vote_count,
            self.runtime,
            self.certification,
            self.poster_path,
            self.budget,
            self.tag_line,
            &self.genre,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

impl<'a> SubRecord<'a> for Genre<'a> {
    const ROLE: Role = Role::Genre;
    const ARITY: usize = 2;

    fn from_values(_movie_id: &'a str, values: &[&'a str]) -> Self {
        Genre {
            id: values[0],
            name: values[1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person<'a> {
    pub id: &'a str,
    pub full_name: &'a str,
}

impl<'a> Record for Person<'a> {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "full_name"]
    }

    fn values(&self) -> Vec<&str> {
        vec![self.id, self.full_name]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor<'a> {
    pub movie_id: &'a str,
    pub actor_id: &'a str,
    pub name: &'a str,
    pub character: &'a str,
}

impl<'a> Actor<'a> {
    pub fn person(&self) -> Person<'a> {
        Person {
            id: self.actor_id,
            full_name: self.name,
        }
    }

    pub fn character(&self) -> MovieActor<'a> {
        MovieActor {
            movie_id: self.movie_id,
            actor_id: self.actor_id,
            character_name: self.character,
        }
    }
}

impl<'a> SubRecord<'a> for Actor<'a> {
    const ROLE: Role = Role::Actor;
    const ARITY: usize = 3;

    fn from_values(movie_id: &'a str, values: &[&'a str]) -> Self {
        Actor {
            movie_id,
            actor_id: values[0],
            name: values[1],
            character: values[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Director<'a> {
    pub movie_id: &'a str,
    pub director_id: &'a str,
    pub name: &'a str,
}

impl<'a> Director<'a> {
    pub fn person(&self) -> Person<'a> {
        Person {
            id: self.director_id,
            full_name: self.name,
        }
    }

    pub fn direction(&self) -> MovieDirector<'a> {
        MovieDirector {
            movie_id: self.movie_id,
            director_id: self.director_id,
        }
    }
}

impl<'a> SubRecord<'a> for Director<'a> {
    const ROLE: Role = Role::Director;
    const ARITY: usize = 2;

    fn from_values(movie_id: &'a str, values: &[&'a str]) -> Self {
        Director {
            movie_id,
            director_id: values[0],
            name: values[1],
        }
    }
}

/// Row of the `characters` relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieActor<'a> {
    pub movie_id: &'a str,
    pub actor_id: &'a str,
    pub character_name: &'a str,
}

impl<'a> Record for MovieActor<'a> {
    fn columns(&self) -> &'static [&'static str] {
        &["movie_id", "actor_id", "character_name"]
    }

    fn values(&self) -> Vec<&str> {
        vec![self.movie_id, self.actor_id, self.character_name]
    }
}

/// Row of the `directors` relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieDirector<'a> {
    pub movie_id: &'a str,
    pub director_id: &'a str,
}

impl<'a> Record for MovieDirector<'a> {
    fn columns(&self) -> &'static [&'static str] {
        &["movie_id", "director_id"]
    }

    fn values(&self) -> Vec<&str> {
        vec![self.movie_id, self.director_id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::split_list;

    fn item(raw: &str) -> Item<'_> {
        split_list(raw).next().unwrap()
    }

    #[test]
    fn actor_is_normalized() {
        let actor: Actor = normalize("11", &item("3․McAdams․DreamGirl")).unwrap();
        assert_eq!(
            actor.person(),
            Person {
                id: "3",
                full_name: "McAdams"
            }
        );
        assert_eq!(
            actor.character().fields(),
            vec![
                ("movie_id", "11"),
                ("actor_id", "3"),
                ("character_name", "DreamGirl")
            ]
        );
    }

    #[test]
    fn director_is_normalized() {
        let director: Director = normalize("11", &item("525․Nolan")).unwrap();
        assert_eq!(director.person().fields(), vec![("id", "525"), ("full_name", "Nolan")]);
        assert_eq!(
            director.direction().fields(),
            vec![("movie_id", "11"), ("director_id", "525")]
        );
    }

    #[test]
    fn wrong_arity_is_an_error() {
        let err = normalize::<Actor>("11", &item("3․McAdams")).unwrap_err();
        assert_eq!(
            err,
            ArityError {
                movie_id: "11".into(),
                role: Role::Actor,
                expected: 3,
                found: 2,
                raw: "3․McAdams".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "[11::actor] expected 3 fields, found 2 in \"3․McAdams\""
        );

        let err = normalize::<Director>("11", &item("525․Nolan․extra")).unwrap_err();
        assert_eq!(err.role, Role::Director);
        assert_eq!(err.found, 3);
    }

    #[test]
    fn genre_takes_id_and_name() {
        let genre: Genre = normalize("11", &item("878․SciFi")).unwrap();
        assert_eq!(genre.name, "SciFi");
        assert!(normalize::<Genre>("11", &item("SciFi")).is_err());
    }

    #[test]
    fn movie_line_is_parsed() {
        let line = "11‣Inception‣Inception‣2010-07-16‣Released‣8.3‣14075‣148‣PG-13‣/p.jpg‣160000000‣‣g‣d‣a";
        let parsed = MovieLine::parse(line).unwrap();
        assert_eq!(parsed.id(), "11");
        assert_eq!((parsed.genres, parsed.directors, parsed.actors), ("g", "d", "a"));

        let movie = parsed.movie("SciFi".to_owned());
        let fields = movie.fields();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[1], ("title", "Inception"));
        assert_eq!(fields[11], ("tag_line", ""));
        assert_eq!(fields[12], ("genre", "SciFi"));
    }

    #[test]
    fn short_movie_line_is_an_error() {
        let err = MovieLine::parse("11‣Inception‣‣").unwrap_err();
        assert_eq!(err.role, Role::Movie);
        assert_eq!(err.movie_id, "11");
        assert_eq!(err.expected, LINE_ARITY);
        assert_eq!(err.found, 4);
        assert_eq!(err.raw, "11‣Inception‣‣");
    }

    #[test]
    fn long_movie_line_is_an_error() {
        let line = vec!["x"; LINE_ARITY + 1].join("‣");
        assert_eq!(MovieLine::parse(&line).unwrap_err().found, LINE_ARITY + 1);
    }
}
