use crate::code_list;

code_list! {
	/// Function performed by a responsible party.
	pub struct Role: "CI_RoleCode" {
		RESOURCE_PROVIDER = "resourceProvider",
		CUSTODIAN = "custodian",
		OWNER = "owner",
		USER = "user",
		DISTRIBUTOR = "distributor",
		ORIGINATOR = "originator",
		POINT_OF_CONTACT = "pointOfContact",
		PRINCIPAL_INVESTIGATOR = "principalInvestigator",
		PROCESSOR = "processor",
		PUBLISHER = "publisher",
		AUTHOR = "author",
		SPONSOR = "sponsor",
		CO_AUTHOR = "coAuthor",
		COLLABORATOR = "collaborator",
		EDITOR = "editor",
		MEDIATOR = "mediator",
		RIGHTS_HOLDER = "rightsHolder",
		CONTRIBUTOR = "contributor",
		FUNDER = "funder",
		STAKEHOLDER = "stakeholder",
	}
}
