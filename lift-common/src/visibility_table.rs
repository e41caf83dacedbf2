use crate::{
    phase::Phase,
    region::{Layout, Region, Visibility},
};

/// What a phase transition does to one region
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegionRule {
    Show,
    Hide,
    /// Leave the region as the previous phase left it
    Keep,
}

impl RegionRule {
    /// The visibility a region ends up with, given what it was before
    pub fn apply(self, current: Visibility) -> Visibility {
        match self {
            Self::Show => Visibility::Visible,
            Self::Hide => Visibility::Hidden,
            Self::Keep => current,
        }
    }
}

/// The (phase x region) table for one layout.
///
/// The table is total: every phase has a rule for every region the layout
/// carries. `Keep` only appears in the `Start` row (the countdown starts, the
/// panel doesn't change) and for start number, team name and attempt in the
/// `RefereeDecision` row, which arrives while the attempt bar is already laid
/// out.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RegionVisibilitySet {
    layout: Layout,
}

impl RegionVisibilitySet {
    pub fn for_layout(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// `None` if the layout doesn't carry `region`
    pub fn rule(&self, phase: Phase, region: Region) -> Option<RegionRule> {
        use RegionRule::*;

        if !self.layout.has_region(region) {
            return None;
        }

        let rule = match phase {
            Phase::Start => Keep,
            Phase::Ready | Phase::Reset => match region {
                Region::BreakTimer | Region::Decision => Hide,
                _ => Show,
            },
            Phase::Down => match region {
                Region::BreakTimer => Hide,
                _ => Show,
            },
            Phase::Break => match region {
                Region::FullName | Region::BreakTimer | Region::Group => Show,
                _ => Hide,
            },
            Phase::GroupDone => match region {
                Region::FullName => Show,
                _ => Hide,
            },
            Phase::RefereeDecision => match region {
                Region::StartNumber | Region::TeamName | Region::Attempt => Keep,
                Region::BreakTimer => Hide,
                Region::FullName
                | Region::Weight
                | Region::AthleteTimer
                | Region::Decision
                | Region::Group => Show,
            },
        };
        Some(rule)
    }

    /// The full row for `phase`, in the layout's region order
    pub fn row(&self, phase: Phase) -> impl Iterator<Item = (Region, RegionRule)> + '_ {
        self.layout
            .regions()
            .filter_map(move |region| self.rule(phase, region).map(|rule| (region, rule)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_table_is_total() {
        for layout in all::<Layout>() {
            let table = RegionVisibilitySet::for_layout(layout);
            for phase in all::<Phase>() {
                for region in layout.regions() {
                    assert!(
                        table.rule(phase, region).is_some(),
                        "{layout}: no rule for {region} in {phase}"
                    );
                }
                assert_eq!(table.row(phase).count(), layout.regions().count());
            }
        }
    }

    #[test]
    fn test_group_only_on_multi_rank() {
        let current = RegionVisibilitySet::for_layout(Layout::CurrentAthlete);
        let multi = RegionVisibilitySet::for_layout(Layout::MultiRank);
        for phase in all::<Phase>() {
            assert_eq!(current.rule(phase, Region::Group), None);
            assert!(multi.rule(phase, Region::Group).is_some());
        }
    }

    #[test]
    fn test_keep_only_where_allowed() {
        for layout in all::<Layout>() {
            let table = RegionVisibilitySet::for_layout(layout);
            for phase in all::<Phase>() {
                for (region, rule) in table.row(phase) {
                    if rule != RegionRule::Keep {
                        continue;
                    }
                    let allowed = phase == Phase::Start
                        || (phase == Phase::RefereeDecision
                            && matches!(
                                region,
                                Region::StartNumber | Region::TeamName | Region::Attempt
                            ));
                    assert!(allowed, "{layout}: unexpected Keep for {region} in {phase}");
                }
            }
        }
    }

    #[test]
    fn test_layouts_share_rows() {
        let current = RegionVisibilitySet::for_layout(Layout::CurrentAthlete);
        let multi = RegionVisibilitySet::for_layout(Layout::MultiRank);
        for phase in all::<Phase>() {
            for region in Layout::CurrentAthlete.regions() {
                assert_eq!(current.rule(phase, region), multi.rule(phase, region));
            }
        }
    }

    #[test]
    fn test_down_differs_from_referee_decision() {
        let table = RegionVisibilitySet::for_layout(Layout::CurrentAthlete);
        for region in [Region::StartNumber, Region::TeamName, Region::Attempt] {
            assert_eq!(table.rule(Phase::Down, region), Some(RegionRule::Show));
            assert_eq!(
                table.rule(Phase::RefereeDecision, region),
                Some(RegionRule::Keep)
            );
        }
    }

    #[test]
    fn test_rule_apply() {
        assert_eq!(RegionRule::Show.apply(Visibility::Hidden), Visibility::Visible);
        assert_eq!(RegionRule::Hide.apply(Visibility::Visible), Visibility::Hidden);
        assert_eq!(RegionRule::Keep.apply(Visibility::Visible), Visibility::Visible);
        assert_eq!(RegionRule::Keep.apply(Visibility::Hidden), Visibility::Hidden);
    }
}
