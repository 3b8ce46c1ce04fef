use std::fmt;

/// A single move: take the top disk of peg `src` and place it on peg
/// `dst`. Pegs are indexed 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: usize,
    pub dst: usize,
}

impl Move {
    pub fn new(src: usize, dst: usize) -> Self {
        Move { src, dst }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{}", self.src, self.dst)
    }
}

/// One configuration of the puzzle: three pegs of disks, identified
/// by size.
///
/// Disks are stored bottom first, so the last element of a peg is the
/// disk free to move. In every reachable state a peg is strictly
/// decreasing from bottom to top, and the three pegs together hold
/// the disks 1..=N exactly once each.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HanoiState {
    pub(crate) pegs: [Vec<u32>; 3],
    pub(crate) disks: u32,
}

impl HanoiState {
    pub(crate) fn new(pegs: [Vec<u32>; 3], disks: u32) -> Self {
        HanoiState { pegs, disks }
    }

    /// The disks on peg `index`, bottom first.
    pub fn peg(&self, index: usize) -> &[u32] {
        &self.pegs[index]
    }

    /// Total number of disks in play.
    pub fn disks(&self) -> u32 {
        self.disks
    }
}

impl fmt::Display for HanoiState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?}|{:?}|{:?}",
            self.pegs[0], self.pegs[1], self.pegs[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_compare_by_value() {
        let a = HanoiState::new([vec![2, 1], vec![], vec![]], 2);
        let b = HanoiState::new([vec![2, 1], vec![], vec![]], 2);
        let c = HanoiState::new([vec![2], vec![1], vec![]], 2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_distinguishes_states() {
        let a = HanoiState::new([vec![2, 1], vec![], vec![]], 2);
        let b = HanoiState::new([vec![2, 1], vec![], vec![]], 2);
        let c = HanoiState::new([vec![2], vec![1], vec![]], 2);
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a.to_string(), c.to_string());
    }

    #[test]
    fn move_displays_as_src_dst() {
        assert_eq!(Move::new(0, 2).to_string(), "0->2");
    }
}
