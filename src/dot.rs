use std::fmt::{self, Display};

use crate::shape::Shape;

/// A Graphviz DOT rendering of a [`Shape`], produced through its [`Display`]
/// impl.
///
/// Each node is a record labelled with its key and value, identified as
/// `n0`, `n1`, .. in pre-order. An invisible
/// placeholder stands in for each absent child so the layout keeps left and
/// right children on their respective sides.
#[derive(Debug)]
pub struct Dot<'a, K, V> {
    root: &'a Shape<K, V>,
}

impl<'a, K, V> Dot<'a, K, V> {
    pub(crate) fn new(root: &'a Shape<K, V>) -> Self {
        Self { root }
    }
}

impl<K, V> Display for Dot<'_, K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;
        recurse(self.root, &mut 0, f)?;
        writeln!(f, "}}")
    }
}

/// Write the statements for the subtree rooted at `n`, numbering its nodes
/// from `next_id` onwards.
///
/// Node IDs are never derived from keys, so no key can collide with a
/// placeholder ID.
fn recurse<K, V, W>(n: &Shape<K, V>, next_id: &mut usize, buf: &mut W) -> fmt::Result
where
    W: fmt::Write,
    K: Display,
    V: Display,
{
    let id = *next_id;
    *next_id += 1;

    writeln!(
        buf,
        r#"n{} [label="{} | {}"];"#,
        id,
        escape_label(&n.key.to_string()),
        escape_label(&n.value.to_string()),
    )?;

    for (side, v) in [("l", &n.left), ("r", &n.right)] {
        match v {
            Some(v) => {
                writeln!(buf, "n{} -> n{} [color = \"orange1\";];", id, *next_id)?;
                recurse(&**v, next_id, buf)?;
            }
            None => {
                writeln!(buf, "null_{side}_{id} [shape=point,style=invis];")?;
                writeln!(buf, "n{id} -> null_{side}_{id} [style=invis];")?;
            }
        };
    }

    Ok(())
}

/// Escape `s` for use as a field inside a record label, where braces, pipes
/// and angle brackets are structural.
fn escape_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '{' | '}' | '|' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
