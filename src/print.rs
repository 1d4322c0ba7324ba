//! Human readable dumps of a [`Tree`].
//!
//! Each `write_*` method renders to any [`io::Write`] and has a `print_*` twin that writes to
//! stdout. The output is meant for people; nothing parses it back.

use std::fmt::Display;
use std::io::{self, Write};

use crate::tree::Tree;

impl<T: Display> Tree<T> {
    /// Writes the elements in sorted order, one per line, or `Empty tree` if there are none.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_tree(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
    /// ```
    pub fn write_tree<W: Write>(&self, mut out: W) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "Empty tree");
        }
        for element in self.in_order() {
            writeln!(out, "{element}")?;
        }

        Ok(())
    }

    /// Writes a pre-order traversal on a single line after a header line.
    pub fn write_pre_order<W: Write>(&self, out: W) -> io::Result<()> {
        write_traversal(out, "Pre order traversal of tree", self.pre_order())
    }

    /// Writes an in-order traversal on a single line after a header line.
    pub fn write_in_order<W: Write>(&self, out: W) -> io::Result<()> {
        write_traversal(out, "Inorder traversal of tree", self.in_order())
    }

    /// Writes a post-order traversal on a single line after a header line.
    pub fn write_post_order<W: Write>(&self, out: W) -> io::Result<()> {
        write_traversal(out, "Post order traversal of tree", self.post_order())
    }

    /// Writes one line per level of the tree, root first. Writes nothing for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [100, 50, 150, 40, 45].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_level_order(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "100\n50 150\n40\n45\n");
    /// ```
    pub fn write_level_order<W: Write>(&self, mut out: W) -> io::Result<()> {
        for level in self.levels() {
            write_row(&mut out, level)?;
        }

        Ok(())
    }

    /// [`Tree::write_tree`] to stdout.
    pub fn print_tree(&self) -> io::Result<()> {
        self.write_tree(io::stdout().lock())
    }

    /// [`Tree::write_pre_order`] to stdout.
    pub fn print_pre_order(&self) -> io::Result<()> {
        self.write_pre_order(io::stdout().lock())
    }

    /// [`Tree::write_in_order`] to stdout.
    pub fn print_in_order(&self) -> io::Result<()> {
        self.write_in_order(io::stdout().lock())
    }

    /// [`Tree::write_post_order`] to stdout.
    pub fn print_post_order(&self) -> io::Result<()> {
        self.write_post_order(io::stdout().lock())
    }

    /// [`Tree::write_level_order`] to stdout.
    pub fn print_level_order(&self) -> io::Result<()> {
        self.write_level_order(io::stdout().lock())
    }
}

fn write_traversal<'a, W, T, I>(mut out: W, header: &str, elements: I) -> io::Result<()>
where
    W: Write,
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    writeln!(out, "{header}")?;
    write_row(&mut out, elements)
}

/// Writes the elements separated by single spaces and ends the line.
fn write_row<'a, W, T, I>(out: &mut W, elements: I) -> io::Result<()>
where
    W: Write,
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{element}")?;
    }
    writeln!(out)
}
