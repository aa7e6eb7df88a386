use crate::code_list;

code_list! {
	/// Mode in which data is represented.
	pub struct PresentationForm: "CI_PresentationFormCode" {
		DOCUMENT_DIGITAL = "documentDigital",
		DOCUMENT_HARDCOPY = "documentHardcopy",
		IMAGE_DIGITAL = "imageDigital",
		IMAGE_HARDCOPY = "imageHardcopy",
		MAP_DIGITAL = "mapDigital",
		MAP_HARDCOPY = "mapHardcopy",
		MODEL_DIGITAL = "modelDigital",
		MODEL_HARDCOPY = "modelHardcopy",
		PROFILE_DIGITAL = "profileDigital",
		PROFILE_HARDCOPY = "profileHardcopy",
		TABLE_DIGITAL = "tableDigital",
		TABLE_HARDCOPY = "tableHardcopy",
		VIDEO_DIGITAL = "videoDigital",
		VIDEO_HARDCOPY = "videoHardcopy",
		AUDIO_DIGITAL = "audioDigital",
		AUDIO_HARDCOPY = "audioHardcopy",
		MULTIMEDIA_DIGITAL = "multimediaDigital",
		MULTIMEDIA_HARDCOPY = "multimediaHardcopy",
		PHYSICAL_OBJECT = "physicalObject",
		DIAGRAM_DIGITAL = "diagramDigital",
		DIAGRAM_HARDCOPY = "diagramHardcopy",
	}
}
