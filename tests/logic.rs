//! A reader for a small Prolog-like language.
//!
//! Names are interned into the inherited attribute, which also tracks the variables of the
//! clause being read. The grammar itself is immutable and shared between threads.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::thread;

use descent::prelude::*;

type Name = usize;
type Var  = usize;

#[derive(Clone, Debug, Default, PartialEq)]
struct Struct {
    name: Name,
    args: Vec<Term>,
}

#[derive(Clone, Debug, PartialEq)]
enum Term {
    Var(Var),
    Struct(Struct),
}

impl Default for Term {
    fn default() -> Self {
        Term::Var(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Clause {
    head:     Struct,
    goals:    Vec<Struct>,
    /// Variables occurring more than once in the head.
    repeated: BTreeSet<Var>,
}

#[derive(Debug, Default)]
struct State {
    names:            Vec<String>,
    interned:         HashMap<String, Name>,
    /// Name of every variable created so far.
    var_names:        Vec<Name>,
    /// Variables of the current clause by name.
    variables:        HashMap<Name, Var>,
    repeated:         BTreeSet<Var>,
    repeated_in_head: BTreeSet<Var>,
}

impl State {
    fn intern(&mut self, name: &str) -> Name {
        if let Some(&n) = self.interned.get(name) {
            return n;
        }

        self.names.push(name.to_owned());
        self.interned.insert(name.to_owned(), self.names.len() - 1);

        self.names.len() - 1
    }

    fn end_clause(&mut self) {
        self.variables.clear();
        self.repeated.clear();
        self.repeated_in_head.clear();
    }

    fn show_struct(&self, s: &Struct) -> String {
        let name = &self.names[s.name];

        if s.args.is_empty() {
            return name.clone();
        }

        let args: Vec<_> = s.args.iter().map(|t| match *t {
            Term::Var(v)        => self.names[self.var_names[v]].clone(),
            Term::Struct(ref s) => self.show_struct(s),
        }).collect();

        format!("{}({})", name, args.join(", "))
    }

    fn show(&self, c: &Clause) -> String {
        let mut s = self.show_struct(&c.head);

        if !c.goals.is_empty() {
            let goals: Vec<_> = c.goals.iter().map(|g| self.show_struct(g)).collect();

            s.push_str(" :- ");
            s.push_str(&goals.join(", "));
        }

        s.push('.');

        s
    }
}

fn return_variable(res: &mut Term, (name,): (String,), st: &mut State) {
    let n = st.intern(&name);

    let v = match st.variables.get(&n) {
        Some(&v) => {
            st.repeated.insert(v);

            v
        },
        None => {
            st.var_names.push(n);

            let v = st.var_names.len() - 1;

            st.variables.insert(n, v);

            v
        },
    };

    *res = Term::Var(v);
}

fn return_args(res: &mut Vec<Term>, n: usize, (var, s): (Term, Struct), _: &mut State) {
    match n {
        0 => res.push(var),
        _ => res.push(Term::Struct(s)),
    }
}

fn return_struct(res: &mut Struct, (name, args): (String, Vec<Term>), st: &mut State) {
    *res = Struct {
        name: st.intern(&name),
        args: args,
    };
}

fn return_head(res: &mut Struct, (s,): (Struct,), st: &mut State) {
    *res = s;
    st.repeated_in_head = st.repeated.clone();
}

fn return_goal(res: &mut Vec<Struct>, (s,): (Struct,)) {
    res.push(s);
}

fn return_clause(res: &mut Vec<Clause>, (head, goals): (Struct, Vec<Struct>), st: &mut State) {
    res.push(Clause {
        head:     head,
        goals:    goals,
        repeated: st.repeated_in_head.clone(),
    });

    st.end_clause();
}

fn return_query(res: &mut Vec<Clause>, (goals,): (Vec<Struct>,), st: &mut State) {
    let mut vars: Vec<_> = st.variables.values().cloned().collect();

    vars.sort();

    res.push(Clause {
        head:     Struct { name: st.intern("goal"), args: vars.into_iter().map(Term::Var).collect() },
        goals:    goals,
        repeated: BTreeSet::new(),
    });

    st.end_clause();
}

type Program = Arc<dyn Parser<State, Output=Vec<Clause>> + Send + Sync>;

fn program() -> Program {
    let rest     = || many(accept(Alnum | Char(b'_')));
    let atom     = lexeme(sequence(accept(Lower), rest()));
    let var      = lexeme(sequence(accept(Upper | Char(b'_')), rest()));
    let open     = discard(lexeme(accept(Char(b'('))));
    let close    = discard(lexeme(expect(Char(b')'))));
    let sep      = lexeme(accept(Char(b',')));
    let end      = discard(lexeme(accept(Char(b'.'))));
    let implies  = discard(lexeme(accept_str(":-")));
    let comment  = define("comment", discard(lexeme(sequence(accept(Char(b'#')), sequence(many(accept(Print)), accept(Char(b'\n')))))));

    let variable  = define("variable", all_with(return_variable, (var,)));
    let arg_sep   = sep.clone();
    let structure = fix(move |s| {
        all_with(return_struct, (atom, option(sequence(open,
            sequence(sep_by(any_with(return_args, (variable, s)), arg_sep), close)))))
    });

    let goals  = sequence(implies, sep_by(all(return_goal, (structure.clone(),)), sep));
    let query  = define("query", sequence(all_with(return_query, (goals.clone(),)), end));
    let clause = define("clause",
                        all_with(return_clause, (all_with(return_head, (structure,)), sequence(option(goals), end))));

    let item = choice(clause, choice(query, comment));

    Arc::new(sequence(discard(many(accept(Space))),
                      sequence(strict("clause", some(item)), discard(expect(End)))))
}

fn read(p: &Program, input: &str, st: &mut State) -> Vec<String> {
    let mut i   = Stream::new(input.as_bytes()).unwrap();
    let clauses = parse_stream(&**p, &mut i, st).unwrap().unwrap();

    clauses.iter().map(|c| st.show(c)).collect()
}

const FAMILY: &str = "
# family tree
parent(tom, bob).
parent(bob, ann).

ancestor(X, Y) :- parent(X, Y).
ancestor(X, Y) :-
    parent(X, Z),
    ancestor(Z, Y).

:- ancestor(tom, Who).
";

#[test]
fn clauses() {
    let mut st = State::default();

    assert_eq!(read(&program(), FAMILY, &mut st), [
        "parent(tom, bob).",
        "parent(bob, ann).",
        "ancestor(X, Y) :- parent(X, Y).",
        "ancestor(X, Y) :- parent(X, Z), ancestor(Z, Y).",
        "goal(Who) :- ancestor(tom, Who).",
    ]);
}

#[test]
fn names_are_interned() {
    let p      = program();
    let mut st = State::default();

    read(&p, "f(a). g(a, f).", &mut st);

    assert_eq!(st.names, ["a", "f", "g"]);

    read(&p, "h(f(g)).", &mut st);

    assert_eq!(st.names, ["a", "f", "g", "h"]);
}

#[test]
fn nested_structures() {
    let mut st = State::default();

    assert_eq!(read(&program(), "p(f(g(X), h), Y).", &mut st), ["p(f(g(X), h), Y)."]);
}

#[test]
fn repeated_head_variables() {
    let p       = program();
    let mut st  = State::default();
    let mut i   = Stream::new(&b"eq(X, X). same(A, B) :- eq(A, B), eq(B, A)."[..]).unwrap();
    let clauses = parse_stream(&*p, &mut i, &mut st).unwrap().unwrap();

    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].repeated.len(), 1);
    assert!(clauses[1].repeated.is_empty());
    assert_eq!(clauses[1].goals.len(), 2);
}

#[test]
fn unclosed_arguments() {
    let mut st = State::default();
    let mut i  = Stream::new(&b"foo(X, ."[..]).unwrap();
    let e      = parse_stream(&*program(), &mut i, &mut st).unwrap_err();

    assert_eq!(e.to_string(), "expected ')' found '.' at line 1, column 8");
}

#[test]
fn unexpected_character() {
    let mut st = State::default();
    let mut i  = Stream::new(&b"foo(X) bar."[..]).unwrap();
    let e      = parse_stream(&*program(), &mut i, &mut st).unwrap_err();

    assert_eq!(e.to_string(), "expected clause found 'b' at line 1, column 8");
}

#[test]
fn trailing_garbage() {
    let mut st = State::default();
    let mut i  = Stream::new(&b"a.\n?"[..]).unwrap();
    let e      = parse_stream(&*program(), &mut i, &mut st).unwrap_err();
    let e      = e.parse_error().unwrap();

    assert_eq!((e.row, e.col, e.found), (2, 0, Symbol::Byte(b'?')));
}

#[test]
fn concurrent_readers() {
    let p = program();

    let handles: Vec<_> = (0..4).map(|n| {
        let p = p.clone();

        thread::spawn(move || {
            let mut st = State::default();
            let input  = format!("f{}(X, Y) :- g(Y, X).", n);

            read(&p, &input, &mut st)
        })
    }).collect();

    for (n, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), [format!("f{}(X, Y) :- g(Y, X).", n)]);
    }
}
