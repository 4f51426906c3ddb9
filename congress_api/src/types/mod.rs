mod member;
pub use self::member::{
    ContactInfo, ExternalIds, Identity, Member, MemberDetail, SocialAccounts, VoteRecord,
};

mod role;
pub use self::role::{CommitteePost, Role, SubcommitteePost};

mod current;
pub use self::current::CurrentMember;

mod transition;
pub use self::transition::MemberTransition;
